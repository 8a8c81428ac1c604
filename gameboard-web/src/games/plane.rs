//! Plane balancing: fly the plane through the ring with finger pinches

use nalgebra::Vector3;

use super::command::{NodeSpawn, SceneCommand};
use super::GameController;
use crate::gesture::{Finger, Gesture, GestureClassifier, HandPose};
use crate::physics::Impulse;

pub const PLANE_NODE: &str = "Plane";
pub const RING_NODE: &str = "Ring";

const PINCH_ORDER: [Gesture; 4] = [
    Gesture::Pinch(Finger::Index),
    Gesture::Pinch(Finger::Middle),
    Gesture::Pinch(Finger::Ring),
    Gesture::Pinch(Finger::Little),
];

const THRUST: f32 = 4.0;

pub struct PlaneGame {
    classifier: GestureClassifier,
}

impl PlaneGame {
    pub fn new(classifier: GestureClassifier) -> Self {
        Self { classifier }
    }

    fn thrust(finger: Finger) -> Option<Impulse> {
        match finger {
            Finger::Index => Some(Impulse::new(0.0, 0.0, -THRUST)),
            Finger::Middle => Some(Impulse::new(0.0, 0.0, THRUST)),
            Finger::Ring => Some(Impulse::new(0.0, -THRUST, 0.0)),
            Finger::Little => Some(Impulse::new(0.0, THRUST, 0.0)),
            Finger::Thumb => None,
        }
    }
}

impl GameController for PlaneGame {
    fn name(&self) -> &'static str {
        "plane"
    }

    fn start(&mut self) -> Vec<SceneCommand> {
        vec![
            SceneCommand::SpawnNode(NodeSpawn::new(
                PLANE_NODE,
                "Plane.scn",
                Vector3::new(0.0, 0.0, -2.0),
            )),
            SceneCommand::SpawnNode(NodeSpawn::new(
                RING_NODE,
                "torus",
                Vector3::new(0.0, 0.0, -3.0),
            )),
        ]
    }

    fn on_hand_pose(&mut self, pose: Option<&HandPose>) -> Vec<SceneCommand> {
        let mut commands = vec![SceneCommand::clear_forces(PLANE_NODE)];
        let Some(pose) = pose else {
            return commands;
        };

        if let Gesture::Pinch(finger) = self.classifier.first_match(pose, &PINCH_ORDER) {
            if let Some(impulse) = Self::thrust(finger) {
                log::debug!("plane thrust from {} pinch", finger.name());
                commands.push(SceneCommand::impulse(PLANE_NODE, impulse));
            }
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::classifier::fixtures::{pinching, spread_hand};
    use crate::gesture::{GestureThresholds, HandJoint, HandPoint};

    fn game() -> PlaneGame {
        PlaneGame::new(GestureClassifier::new(GestureThresholds::plane()))
    }

    #[test]
    fn test_each_pinch_pushes_its_way() {
        let cases = [
            (Finger::Index, Impulse::new(0.0, 0.0, -4.0)),
            (Finger::Middle, Impulse::new(0.0, 0.0, 4.0)),
            (Finger::Ring, Impulse::new(0.0, -4.0, 0.0)),
            (Finger::Little, Impulse::new(0.0, 4.0, 0.0)),
        ];
        for (finger, impulse) in cases {
            let commands = game().on_hand_pose(Some(&pinching(finger)));
            assert_eq!(
                commands,
                vec![
                    SceneCommand::clear_forces(PLANE_NODE),
                    SceneCommand::impulse(PLANE_NODE, impulse),
                ]
            );
        }
    }

    #[test]
    fn test_index_pinch_wins_ties() {
        // thumb touching index and middle at once
        let pose = HandPose::empty()
            .with(HandJoint::ThumbTip, HandPoint::new(0.5, 0.5, 1.0))
            .with(HandJoint::IndexTip, HandPoint::new(0.51, 0.5, 1.0))
            .with(HandJoint::MiddleTip, HandPoint::new(0.49, 0.5, 1.0));
        let commands = game().on_hand_pose(Some(&pose));
        assert_eq!(
            commands[1],
            SceneCommand::impulse(PLANE_NODE, Impulse::new(0.0, 0.0, -4.0))
        );
    }

    #[test]
    fn test_no_pinch_only_clears() {
        let commands = game().on_hand_pose(Some(&spread_hand()));
        assert_eq!(commands, vec![SceneCommand::clear_forces(PLANE_NODE)]);
        let commands = game().on_hand_pose(None);
        assert_eq!(commands, vec![SceneCommand::clear_forces(PLANE_NODE)]);
    }

    #[test]
    fn test_start_places_plane_and_ring() {
        let commands = game().start();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].node(), Some(PLANE_NODE));
    }
}
