//! Body sound-board: raise a hand or a foot to play a note

use super::command::SceneCommand;
use super::GameController;
use crate::pose::{BodyPose, LimbTriggers};

#[derive(Default)]
pub struct BodyGame {
    triggers: LimbTriggers,
}

impl BodyGame {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameController for BodyGame {
    fn name(&self) -> &'static str {
        "body"
    }

    fn on_body_pose(&mut self, pose: &BodyPose) -> Vec<SceneCommand> {
        self.triggers
            .update(pose)
            .into_iter()
            .map(|event| {
                log::debug!("{:?} plays {}", event, event.sound());
                SceneCommand::PlaySound {
                    sound: event.sound().to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::body::{LEFT_FOOT, LEFT_HAND, LEFT_SHOULDER, RIGHT_FOOT, RIGHT_HAND, RIGHT_SHOULDER};
    use nalgebra::Point3;

    fn pose(left_hand: f32, right_hand: f32) -> BodyPose {
        BodyPose::new()
            .with(LEFT_SHOULDER, Point3::new(0.2, 1.4, 0.0))
            .with(RIGHT_SHOULDER, Point3::new(-0.2, 1.4, 0.0))
            .with(LEFT_HAND, Point3::new(0.3, left_hand, 0.0))
            .with(RIGHT_HAND, Point3::new(-0.3, right_hand, 0.0))
            .with(LEFT_FOOT, Point3::new(0.1, 0.0, 0.0))
            .with(RIGHT_FOOT, Point3::new(-0.1, 0.0, 0.0))
    }

    #[test]
    fn test_both_hands_play_both_notes() {
        let mut game = BodyGame::new();
        let commands = game.on_body_pose(&pose(1.8, 1.8));
        assert_eq!(
            commands,
            vec![
                SceneCommand::PlaySound { sound: "Do".to_string() },
                SceneCommand::PlaySound { sound: "Re".to_string() },
            ]
        );
        assert!(game.on_body_pose(&pose(1.8, 1.8)).is_empty());
    }

    #[test]
    fn test_note_replays_after_lowering() {
        let mut game = BodyGame::new();
        game.on_body_pose(&pose(0.9, 1.8));
        game.on_body_pose(&pose(0.9, 1.0));
        assert_eq!(
            game.on_body_pose(&pose(0.9, 1.8)),
            vec![SceneCommand::PlaySound { sound: "Re".to_string() }]
        );
    }
}
