//! Body skeleton limb triggers
//!
//! Each trigger compares one joint's height against a reference joint.
//! It fires once when the joint rises more than [`RAISE_MARGIN`] above the
//! reference and re-arms only after the joint drops back to (or below) the
//! reference height.

use std::collections::HashMap;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Height above the reference joint that fires a trigger, in meters
pub const RAISE_MARGIN: f32 = 0.2;

pub const LEFT_HAND: &str = "left_hand_joint";
pub const RIGHT_HAND: &str = "right_hand_joint";
pub const LEFT_SHOULDER: &str = "left_shoulder_1_joint";
pub const RIGHT_SHOULDER: &str = "right_shoulder_1_joint";
pub const LEFT_FOOT: &str = "left_foot_joint";
pub const RIGHT_FOOT: &str = "right_foot_joint";

/// Model-space joint positions keyed by skeleton joint name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyPose {
    joints: HashMap<String, Point3<f32>>,
}

impl BodyPose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, joint: &str, position: Point3<f32>) -> Self {
        self.joints.insert(joint.to_string(), position);
        self
    }

    pub fn get(&self, joint: &str) -> Option<&Point3<f32>> {
        self.joints.get(joint)
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimbEvent {
    LeftHandUp,
    RightHandUp,
    RightFootForward,
    LeftFootForward,
}

impl LimbEvent {
    /// Note played for this limb
    pub fn sound(&self) -> &'static str {
        match self {
            LimbEvent::LeftHandUp => "Do",
            LimbEvent::RightHandUp => "Re",
            LimbEvent::RightFootForward => "Mi",
            LimbEvent::LeftFootForward => "Fa",
        }
    }
}

struct Trigger {
    event: LimbEvent,
    joint: &'static str,
    reference: &'static str,
}

const TRIGGERS: [Trigger; 4] = [
    Trigger {
        event: LimbEvent::LeftHandUp,
        joint: LEFT_HAND,
        reference: LEFT_SHOULDER,
    },
    Trigger {
        event: LimbEvent::RightHandUp,
        joint: RIGHT_HAND,
        reference: RIGHT_SHOULDER,
    },
    Trigger {
        event: LimbEvent::RightFootForward,
        joint: RIGHT_FOOT,
        reference: LEFT_FOOT,
    },
    Trigger {
        event: LimbEvent::LeftFootForward,
        joint: LEFT_FOOT,
        reference: RIGHT_FOOT,
    },
];

/// Edge-triggered limb raises with hysteresis
#[derive(Clone, Debug, Default)]
pub struct LimbTriggers {
    raised: [bool; 4],
}

impl LimbTriggers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events that fired this frame. A frame missing any of the six
    /// tracked joints changes nothing.
    pub fn update(&mut self, pose: &BodyPose) -> Vec<LimbEvent> {
        let tracked = TRIGGERS
            .iter()
            .all(|t| pose.get(t.joint).is_some() && pose.get(t.reference).is_some());
        if !tracked {
            return Vec::new();
        }

        let mut events = Vec::new();
        for (trigger, raised) in TRIGGERS.iter().zip(self.raised.iter_mut()) {
            let (Some(joint), Some(reference)) = (pose.get(trigger.joint), pose.get(trigger.reference))
            else {
                continue;
            };

            if joint.y - reference.y > RAISE_MARGIN && !*raised {
                *raised = true;
                events.push(trigger.event);
            } else if joint.y <= reference.y {
                *raised = false;
            }
        }
        events
    }

    pub fn is_raised(&self, event: LimbEvent) -> bool {
        TRIGGERS
            .iter()
            .zip(self.raised.iter())
            .any(|(t, &raised)| t.event == event && raised)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Neutral stance with the left hand at `left_hand_y`
    fn stance(left_hand_y: f32) -> BodyPose {
        BodyPose::new()
            .with(LEFT_SHOULDER, Point3::new(0.2, 1.4, 0.0))
            .with(RIGHT_SHOULDER, Point3::new(-0.2, 1.4, 0.0))
            .with(LEFT_HAND, Point3::new(0.3, left_hand_y, 0.0))
            .with(RIGHT_HAND, Point3::new(-0.3, 0.9, 0.0))
            .with(LEFT_FOOT, Point3::new(0.1, 0.0, 0.0))
            .with(RIGHT_FOOT, Point3::new(-0.1, 0.0, 0.0))
    }

    #[test]
    fn test_fires_once_until_rearmed() {
        let mut triggers = LimbTriggers::new();
        assert!(triggers.update(&stance(0.9)).is_empty());

        assert_eq!(triggers.update(&stance(1.7)), vec![LimbEvent::LeftHandUp]);
        assert!(triggers.is_raised(LimbEvent::LeftHandUp));
        // still up, no repeat
        assert!(triggers.update(&stance(1.8)).is_empty());
        // between reference and margin keeps the trigger latched
        assert!(triggers.update(&stance(1.5)).is_empty());
        assert!(triggers.update(&stance(1.7)).is_empty());

        // back at shoulder height re-arms
        assert!(triggers.update(&stance(1.4)).is_empty());
        assert!(!triggers.is_raised(LimbEvent::LeftHandUp));
        assert_eq!(triggers.update(&stance(1.7)), vec![LimbEvent::LeftHandUp]);
    }

    #[test]
    fn test_feet_use_each_other_as_reference() {
        let mut triggers = LimbTriggers::new();
        let pose = stance(0.9).with(RIGHT_FOOT, Point3::new(-0.1, 0.3, 0.0));
        assert_eq!(triggers.update(&pose), vec![LimbEvent::RightFootForward]);

        let pose = stance(0.9).with(LEFT_FOOT, Point3::new(0.1, 0.3, 0.0));
        assert_eq!(triggers.update(&pose), vec![LimbEvent::LeftFootForward]);
        // right foot dropped below the left, so it re-armed
        assert!(!triggers.is_raised(LimbEvent::RightFootForward));
    }

    #[test]
    fn test_incomplete_skeleton_is_ignored() {
        let mut triggers = LimbTriggers::new();
        let pose = BodyPose::new()
            .with(LEFT_HAND, Point3::new(0.0, 2.0, 0.0))
            .with(LEFT_SHOULDER, Point3::new(0.0, 1.4, 0.0));
        assert!(triggers.update(&pose).is_empty());
    }

    #[test]
    fn test_sounds() {
        assert_eq!(LimbEvent::LeftHandUp.sound(), "Do");
        assert_eq!(LimbEvent::LeftFootForward.sound(), "Fa");
    }

    #[test]
    fn test_pose_from_json() {
        let pose: BodyPose =
            serde_json::from_str(r#"{"left_hand_joint":[0.1,1.2,0.0]}"#).unwrap();
        assert_eq!(pose.get(LEFT_HAND), Some(&Point3::new(0.1, 1.2, 0.0)));
        assert_eq!(pose.len(), 1);
    }
}
