//! Obstacle course: tilt the device to roll the ball, tap to jump

use nalgebra::Vector3;

use super::command::{NodeSpawn, SceneCommand};
use super::GameController;
use crate::physics::{Contact, ContactCategory, Impulse, Tilt};

const AREA_NODE: &str = "Root";
const BALL_NODE: &str = "sphere";
const ROLL: f32 = 0.1;
const JUMP: f32 = 5.0;
const RESTART_DELAY: f32 = 1.0;

pub struct ObstaclesGame {
    points: u32,
}

impl ObstaclesGame {
    pub fn new() -> Self {
        Self { points: 0 }
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

impl Default for ObstaclesGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController for ObstaclesGame {
    fn name(&self) -> &'static str {
        "obstacles"
    }

    fn start(&mut self) -> Vec<SceneCommand> {
        vec![SceneCommand::SpawnNode(NodeSpawn::new(
            AREA_NODE,
            "Area.scn",
            Vector3::new(0.0, -0.5, -3.0),
        ))]
    }

    fn on_tilt(&mut self, tilt: Tilt) -> Vec<SceneCommand> {
        let impulse = match tilt {
            Tilt::Left => Impulse::new(-ROLL, 0.0, 0.0),
            Tilt::Right => Impulse::new(ROLL, 0.0, 0.0),
            Tilt::Back => Impulse::new(0.0, 0.0, ROLL),
            Tilt::Forward => Impulse::new(0.0, 0.0, -ROLL),
            Tilt::Level => return Vec::new(),
        };
        vec![SceneCommand::impulse(BALL_NODE, impulse)]
    }

    fn on_tap(&mut self) -> Vec<SceneCommand> {
        vec![SceneCommand::impulse(BALL_NODE, Impulse::new(0.0, JUMP, 0.0))]
    }

    fn on_contact(&mut self, contact: &Contact) -> Vec<SceneCommand> {
        if contact.involves(ContactCategory::Hazard) {
            log::info!("hit a hazard with {} points, restarting", self.points);
            self.points = 0;
            return vec![SceneCommand::Restart {
                delay: RESTART_DELAY,
            }];
        }

        match contact.between(ContactCategory::Player, ContactCategory::Collectible) {
            Some((_, collectible)) => {
                self.points += 1;
                vec![SceneCommand::remove(&collectible.node, 0.0)]
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ContactBody;

    fn contact(a: ContactCategory, b: ContactCategory) -> Contact {
        Contact::new(ContactBody::new("sphere", a), ContactBody::new("coin2", b))
    }

    #[test]
    fn test_tilt_rolls_ball() {
        let mut game = ObstaclesGame::new();
        assert_eq!(
            game.on_tilt(Tilt::Forward),
            vec![SceneCommand::impulse(BALL_NODE, Impulse::new(0.0, 0.0, -0.1))]
        );
        assert_eq!(
            game.on_tilt(Tilt::Left),
            vec![SceneCommand::impulse(BALL_NODE, Impulse::new(-0.1, 0.0, 0.0))]
        );
        assert!(game.on_tilt(Tilt::Level).is_empty());
    }

    #[test]
    fn test_tap_jumps() {
        assert_eq!(
            ObstaclesGame::new().on_tap(),
            vec![SceneCommand::impulse(BALL_NODE, Impulse::new(0.0, 5.0, 0.0))]
        );
    }

    #[test]
    fn test_collectible_scores() {
        let mut game = ObstaclesGame::new();
        let commands = game.on_contact(&contact(ContactCategory::Player, ContactCategory::Collectible));
        assert_eq!(commands, vec![SceneCommand::remove("coin2", 0.0)]);
        assert_eq!(game.points(), 1);
    }

    #[test]
    fn test_hazard_restarts_and_zeroes_points() {
        let mut game = ObstaclesGame::new();
        game.on_contact(&contact(ContactCategory::Player, ContactCategory::Collectible));
        let commands = game.on_contact(&contact(ContactCategory::Hazard, ContactCategory::Player));
        assert_eq!(commands, vec![SceneCommand::Restart { delay: 1.0 }]);
        assert_eq!(game.points(), 0);
    }
}
