//! Bowling
//!
//! Ten pins in a triangular rack. The ball is thrown by a tap. Pins tipped
//! past 45 degrees score and are cleared; once all ten are down the rack is
//! rebuilt.

use std::collections::HashSet;

use nalgebra::Vector3;

use super::command::{NodeSpawn, SceneCommand};
use super::GameController;
use crate::physics::{Contact, ContactCategory, Impulse, PhysicsTag};

pub const PIN_COUNT: usize = 10;
pub const PIN_SPACING: f32 = 0.5;
/// Rack offset down the lane
const RACK_OFFSET: Vector3<f32> = Vector3::new(0.0, 0.05, -4.5);
/// Degrees past which a pin counts as down
const FALLEN_ANGLE: f32 = 45.0;

const BALL_NODE: &str = "givenBall";
const LASER_NODE: &str = "Laser";
const SCORE_NODE: &str = "scoreTextNode";
const ARENA_NODE: &str = "BowlingArena";

const THROW_IMPULSE: f32 = -80.0;
const PIN_REMOVE_DELAY: f32 = 0.3;
const RACK_REBUILD_DELAY: f32 = 1.0;

// ============================================================================
// RACK LAYOUT
// ============================================================================

/// Position of pin `index` (1-based) in a rack with the head pin at the
/// origin. Row `r` holds `r` pins, centered on x, rows recede along -z.
pub fn pin_position(index: usize, spacing: f32) -> Vector3<f32> {
    let mut row = 1;
    let mut placed = 0;
    while placed + row < index {
        placed += row;
        row += 1;
    }
    let position_in_row = index.saturating_sub(placed + 1) as f32;
    let row_offset = (row - 1) as f32;

    Vector3::new(
        position_in_row * spacing - row_offset * spacing / 2.0,
        0.0,
        -row_offset * spacing,
    )
}

fn pin_name(index: usize) -> String {
    format!("pin{}", index)
}

// ============================================================================
// GAME
// ============================================================================

/// Progress of a rack rebuilt after a strike
#[derive(Clone, Copy, Debug, PartialEq)]
enum Rebuild {
    /// Rack is live
    Idle,
    /// Strike scored, waiting for the next tick to anchor the delay
    Scheduled,
    /// New rack takes the scene at this clock time
    At(f64),
}

pub struct BowlingGame {
    arena_placed: bool,
    ball_moving: bool,
    /// Pins of the current rack already scored. The old rack's pins keep
    /// their names until the rebuild lands, so this is only cleared then.
    fallen: HashSet<String>,
    rebuild: Rebuild,
    score: u32,
}

impl BowlingGame {
    pub fn new() -> Self {
        Self {
            arena_placed: false,
            ball_moving: false,
            fallen: HashSet::new(),
            rebuild: Rebuild::Idle,
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_ball_moving(&self) -> bool {
        self.ball_moving
    }

    pub fn is_rebuilding(&self) -> bool {
        self.rebuild != Rebuild::Idle
    }

    fn rack(&mut self, delay: f32) -> Vec<SceneCommand> {
        self.ball_moving = false;

        let tag = PhysicsTag::new(ContactCategory::Pin, &[ContactCategory::Ball]);
        (1..=PIN_COUNT)
            .map(|i| {
                let spawn = NodeSpawn::new(
                    pin_name(i),
                    "BowlingPin.scn",
                    pin_position(i, PIN_SPACING) + RACK_OFFSET,
                )
                .tagged(tag)
                .delayed(delay);
                SceneCommand::SpawnNode(spawn)
            })
            .chain(std::iter::once(SceneCommand::hidden(LASER_NODE, false)))
            .collect()
    }

    fn give_ball(&self) -> SceneCommand {
        let tag = PhysicsTag::new(ContactCategory::Ball, &[ContactCategory::Floor]);
        SceneCommand::SpawnNode(NodeSpawn::new(BALL_NODE, "Ball.scn", Vector3::zeros()).tagged(tag))
    }

    fn throw(&mut self) -> Vec<SceneCommand> {
        if self.ball_moving {
            return Vec::new();
        }
        self.ball_moving = true;
        log::debug!("ball thrown");

        let tag = PhysicsTag::new(
            ContactCategory::Ball,
            &[ContactCategory::FinishFloor, ContactCategory::Pin],
        );
        vec![
            SceneCommand::remove(BALL_NODE, 0.0),
            SceneCommand::SpawnNode(
                NodeSpawn::new(BALL_NODE, "Ball.scn", Vector3::new(0.0, 0.2, 6.0)).tagged(tag),
            ),
            SceneCommand::impulse(BALL_NODE, Impulse::new(0.0, 0.0, THROW_IMPULSE)),
            SceneCommand::hidden(LASER_NODE, true),
        ]
    }
}

impl GameController for BowlingGame {
    fn name(&self) -> &'static str {
        "bowling"
    }

    fn on_tap(&mut self) -> Vec<SceneCommand> {
        if self.arena_placed {
            return self.throw();
        }
        self.arena_placed = true;

        let mut commands = vec![SceneCommand::SpawnNode(NodeSpawn::new(
            ARENA_NODE,
            "BowlingScene.scn",
            Vector3::zeros(),
        ))];
        self.fallen.clear();
        commands.extend(self.rack(0.0));
        commands.push(self.give_ball());
        commands
    }

    fn on_contact(&mut self, contact: &Contact) -> Vec<SceneCommand> {
        let Some((ball, _)) = contact.between(ContactCategory::Ball, ContactCategory::FinishFloor)
        else {
            return Vec::new();
        };
        if !self.ball_moving {
            return Vec::new();
        }

        self.ball_moving = false;
        vec![
            SceneCommand::hidden(LASER_NODE, false),
            SceneCommand::remove(&ball.node, 0.0),
            self.give_ball(),
        ]
    }

    fn on_node_rotation(&mut self, node: &str, radians: f32) -> Vec<SceneCommand> {
        if !node.starts_with("pin") || self.fallen.contains(node) {
            return Vec::new();
        }
        if radians.to_degrees().abs() <= FALLEN_ANGLE {
            return Vec::new();
        }

        self.fallen.insert(node.to_string());
        self.score += 1;
        log::info!("{} down, score {}", node, self.score);

        let mut commands = vec![
            SceneCommand::text(SCORE_NODE, format!("Score: {}", self.score)),
            SceneCommand::remove(node, PIN_REMOVE_DELAY),
        ];
        if self.fallen.len() == PIN_COUNT {
            self.rebuild = Rebuild::Scheduled;
            commands.extend(self.rack(RACK_REBUILD_DELAY));
        }
        commands
    }

    fn tick(&mut self, now: f64) -> Vec<SceneCommand> {
        match self.rebuild {
            Rebuild::Idle => {}
            Rebuild::Scheduled => {
                self.rebuild = Rebuild::At(now + f64::from(RACK_REBUILD_DELAY));
            }
            Rebuild::At(due) if now >= due => {
                log::debug!("new rack live");
                self.fallen.clear();
                self.rebuild = Rebuild::Idle;
            }
            Rebuild::At(_) => {}
        }
        Vec::new()
    }
}

impl Default for BowlingGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ContactBody;
    use approx::assert_relative_eq;

    fn placed_game() -> BowlingGame {
        let mut game = BowlingGame::new();
        game.on_tap();
        game
    }

    fn finish_contact() -> Contact {
        Contact::new(
            ContactBody::new("floor", ContactCategory::FinishFloor),
            ContactBody::new(BALL_NODE, ContactCategory::Ball),
        )
    }

    fn spawned(commands: &[SceneCommand]) -> Vec<&NodeSpawn> {
        commands
            .iter()
            .filter_map(|c| match c {
                SceneCommand::SpawnNode(spawn) => Some(spawn),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_rack_layout() {
        assert_relative_eq!(pin_position(1, 0.5), Vector3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(pin_position(2, 0.5), Vector3::new(-0.25, 0.0, -0.5));
        assert_relative_eq!(pin_position(3, 0.5), Vector3::new(0.25, 0.0, -0.5));
        assert_relative_eq!(pin_position(7, 0.5), Vector3::new(-0.75, 0.0, -1.5));
        assert_relative_eq!(pin_position(10, 0.5), Vector3::new(0.75, 0.0, -1.5));
    }

    #[test]
    fn test_first_tap_sets_up_lane() {
        let mut game = BowlingGame::new();
        let commands = game.on_tap();
        let spawns = spawned(&commands);
        // arena, ten pins, one ball
        assert_eq!(spawns.len(), 12);
        assert_eq!(spawns[1].node, "pin1");
        assert_eq!(spawns[11].node, BALL_NODE);
        assert!(!game.is_ball_moving());
    }

    #[test]
    fn test_throw_hides_laser_until_ball_finishes() {
        let mut game = placed_game();
        let commands = game.on_tap();
        assert!(game.is_ball_moving());
        assert!(commands.contains(&SceneCommand::impulse(BALL_NODE, Impulse::new(0.0, 0.0, -80.0))));
        assert!(commands.contains(&SceneCommand::hidden(LASER_NODE, true)));

        // no second throw while rolling
        assert!(game.on_tap().is_empty());

        let commands = game.on_contact(&finish_contact());
        assert!(!game.is_ball_moving());
        assert_eq!(commands[0], SceneCommand::hidden(LASER_NODE, false));
        assert_eq!(spawned(&commands).len(), 1);
    }

    #[test]
    fn test_repeated_finish_contact_keeps_new_ball() {
        let mut game = placed_game();
        game.on_tap();
        assert_eq!(game.on_contact(&finish_contact()).len(), 3);

        // the handed-out ball must not be removed by a late duplicate
        assert!(game.on_contact(&finish_contact()).is_empty());
        assert!(!game.is_ball_moving());
    }

    #[test]
    fn test_finish_contact_before_throw_is_ignored() {
        let mut game = placed_game();
        assert!(game.on_contact(&finish_contact()).is_empty());
    }

    #[test]
    fn test_fallen_pin_scores_once() {
        let mut game = placed_game();
        assert!(game.on_node_rotation("pin4", 0.5).is_empty());

        let commands = game.on_node_rotation("pin4", 1.2);
        assert_eq!(
            commands,
            vec![
                SceneCommand::text(SCORE_NODE, "Score: 1"),
                SceneCommand::remove("pin4", 0.3),
            ]
        );
        assert!(game.on_node_rotation("pin4", -1.4).is_empty());
        assert_eq!(game.score(), 1);

        // negative angles count by magnitude
        game.on_node_rotation("pin5", -1.0);
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn test_strike_rebuilds_rack() {
        let mut game = placed_game();
        let mut last = Vec::new();
        for i in 1..=PIN_COUNT {
            last = game.on_node_rotation(&pin_name(i), 1.57);
        }
        assert_eq!(game.score(), 10);
        assert!(game.is_rebuilding());
        let spawns = spawned(&last);
        assert_eq!(spawns.len(), PIN_COUNT);
        assert!(spawns.iter().all(|s| s.delay == 1.0));
    }

    #[test]
    fn test_old_rack_pins_do_not_rescore_before_rebuild() {
        let mut game = placed_game();
        for i in 1..=PIN_COUNT {
            game.on_node_rotation(&pin_name(i), 1.57);
        }

        // tipped pin10 is still in the scene and reported again
        assert!(game.on_node_rotation("pin10", 1.57).is_empty());
        assert!(game.tick(20.0).is_empty());
        assert!(game.on_node_rotation("pin10", 1.57).is_empty());
        game.tick(20.5);
        assert!(game.on_node_rotation("pin1", 1.57).is_empty());
        assert_eq!(game.score(), 10);

        // once the new rack is live its pins score again
        game.tick(21.0);
        assert!(!game.is_rebuilding());
        game.on_node_rotation("pin1", 1.57);
        assert_eq!(game.score(), 11);
    }

    #[test]
    fn test_gestures_do_not_throw() {
        use crate::gesture::{HandJoint, HandPoint, HandPose};

        let open = HandPose::empty()
            .with(HandJoint::Wrist, HandPoint::new(0.5, 0.9, 1.0))
            .with(HandJoint::ThumbTip, HandPoint::new(0.1, 0.4, 1.0));
        let mut game = placed_game();
        assert!(game.on_hand_pose(Some(&open)).is_empty());
        assert!(!game.is_ball_moving());
    }
}
