//! Mini-game controllers
//!
//! Each game is a small state machine behind [`GameController`]. The host
//! forwards input (hand frames, tilts, taps, contacts, clock ticks) and
//! applies the [`SceneCommand`]s that come back.

mod body;
mod bowling;
mod command;
mod emoji;
mod jenga;
mod obstacles;
mod plane;
mod shooter;
mod table;

pub use body::BodyGame;
pub use bowling::{pin_position, BowlingGame, PIN_COUNT};
pub use command::{NodeSpawn, SceneCommand};
pub use emoji::EmojiGame;
pub use jenga::{jenga_tower, ControlButton, JengaGame};
pub use obstacles::ObstaclesGame;
pub use plane::PlaneGame;
pub use shooter::ShooterGame;
pub use table::TableGame;

use nalgebra::Vector3;

use crate::config::GameBoardConfig;
use crate::error::{GameBoardError, Result};
use crate::gesture::{GestureClassifier, HandPose};
use crate::physics::{Contact, Tilt};
use crate::pose::{BlendShapes, BodyPose};

/// Input callbacks of one mini-game. Every callback returns the scene
/// mutations it wants applied, in order.
pub trait GameController {
    fn name(&self) -> &'static str;

    /// Scene setup when the game is selected
    fn start(&mut self) -> Vec<SceneCommand> {
        Vec::new()
    }

    /// One tracker frame, `None` when no hand was found
    fn on_hand_pose(&mut self, _pose: Option<&HandPose>) -> Vec<SceneCommand> {
        Vec::new()
    }

    fn on_tilt(&mut self, _tilt: Tilt) -> Vec<SceneCommand> {
        Vec::new()
    }

    fn on_tap(&mut self) -> Vec<SceneCommand> {
        Vec::new()
    }

    fn on_contact(&mut self, _contact: &Contact) -> Vec<SceneCommand> {
        Vec::new()
    }

    /// Node's current rotation angle about its axis
    fn on_node_rotation(&mut self, _node: &str, _radians: f32) -> Vec<SceneCommand> {
        Vec::new()
    }

    fn on_camera(&mut self, _position: Vector3<f32>, _forward: Vector3<f32>) -> Vec<SceneCommand> {
        Vec::new()
    }

    fn on_body_pose(&mut self, _pose: &BodyPose) -> Vec<SceneCommand> {
        Vec::new()
    }

    fn on_blend_shapes(&mut self, _shapes: &BlendShapes) -> Vec<SceneCommand> {
        Vec::new()
    }

    /// Host hit-test result for a tap
    fn on_node_selected(&mut self, _node: &str) -> Vec<SceneCommand> {
        Vec::new()
    }

    fn on_button(&mut self, _button: ControlButton) -> Vec<SceneCommand> {
        Vec::new()
    }

    /// Clock in seconds, supplied by the host
    fn tick(&mut self, _now: f64) -> Vec<SceneCommand> {
        Vec::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    Plane,
    Bowling,
    Shooter,
    Obstacles,
    Table,
    Jenga,
    Body,
    Emoji,
}

impl GameKind {
    pub const ALL: [GameKind; 8] = [
        GameKind::Plane,
        GameKind::Bowling,
        GameKind::Shooter,
        GameKind::Obstacles,
        GameKind::Table,
        GameKind::Jenga,
        GameKind::Body,
        GameKind::Emoji,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GameKind::Plane => "plane",
            GameKind::Bowling => "bowling",
            GameKind::Shooter => "shooter",
            GameKind::Obstacles => "obstacles",
            GameKind::Table => "table",
            GameKind::Jenga => "jenga",
            GameKind::Body => "body",
            GameKind::Emoji => "emoji",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| GameBoardError::UnknownGame(name.to_string()))
    }
}

/// Build a game. `seed` drives the games that randomize their layout.
pub fn create_game(kind: GameKind, config: &GameBoardConfig, seed: u64) -> Box<dyn GameController> {
    match kind {
        GameKind::Plane => Box::new(PlaneGame::new(GestureClassifier::new(
            config.plane_gestures.clone(),
        ))),
        GameKind::Bowling => Box::new(BowlingGame::new()),
        GameKind::Shooter => Box::new(ShooterGame::new(
            GestureClassifier::new(config.gestures.clone()),
            seed,
        )),
        GameKind::Obstacles => Box::new(ObstaclesGame::new()),
        GameKind::Table => Box::new(TableGame::new(seed)),
        GameKind::Jenga => Box::new(JengaGame::new()),
        GameKind::Body => Box::new(BodyGame::new()),
        GameKind::Emoji => Box::new(EmojiGame::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_names_round_trip() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_name(kind.name()).unwrap(), kind);
        }
        assert!(matches!(
            GameKind::from_name("zoo"),
            Err(GameBoardError::UnknownGame(name)) if name == "zoo"
        ));
    }

    #[test]
    fn test_factory_builds_every_game() {
        let config = GameBoardConfig::default();
        for kind in GameKind::ALL {
            let game = create_game(kind, &config, 7);
            assert_eq!(game.name(), kind.name());
        }
    }
}
