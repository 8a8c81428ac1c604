//! Hand gesture recognition
//!
//! - `landmarks`: the 21 tracked keypoints of one hand
//! - `thresholds`: the fixed distances every rule compares against
//! - `classifier`: per-gesture rules and the single-label classifier
//! - `label`: the gesture vocabulary

pub mod classifier;
pub mod label;
pub mod landmarks;
pub mod thresholds;

pub use classifier::GestureClassifier;
pub use label::Gesture;
pub use landmarks::{distance, Finger, HandJoint, HandPoint, HandPose, HAND_LANDMARK_COUNT};
pub use thresholds::GestureThresholds;
