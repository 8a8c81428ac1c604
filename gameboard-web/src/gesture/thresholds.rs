//! Fixed geometric thresholds for the hand gesture rules
//!
//! All distances are absolute, in the tracker's normalized image space.
//! They do not scale with hand size or distance from the camera.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    /// Thumb tip to fingertip distance below which the two touch
    pub pinch_distance: f32,
    /// Landmarks read by the gated rules need a confidence above this
    pub confidence_floor: f32,
    /// Tip to base distance above which a finger counts as extended (open hand)
    pub open_extension: f32,
    /// Minimum gap between adjacent fingertips (open hand)
    pub open_spread: f32,
    /// Tip to base distance below which a finger counts as curled (closed hand)
    pub closed_curl: f32,
    /// Thumb tip to MP distance above which the thumb counts as extended
    pub thumb_extension: f32,
    /// Looser curl used by thumbs-up and victory for the folded fingers
    pub fold_curl: f32,
    /// Index and middle reach needed for victory
    pub victory_extension: f32,
    /// Index to middle tip gap needed for victory
    pub victory_separation: f32,
    /// Confidence gate of the single-label classifier
    pub label_confidence_floor: f32,
    /// Thumb to index and thumb to middle distance for a grip label
    pub label_grip_distance: f32,
    /// Thumb to wrist distance for an open label
    pub label_open_distance: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            pinch_distance: 0.05,
            confidence_floor: 0.5,
            open_extension: 0.05,
            open_spread: 0.05,
            closed_curl: 0.02,
            thumb_extension: 0.03,
            fold_curl: 0.2,
            victory_extension: 0.3,
            victory_separation: 0.1,
            label_confidence_floor: 0.3,
            label_grip_distance: 0.1,
            label_open_distance: 0.3,
        }
    }
}

impl GestureThresholds {
    /// Plane-balancing screen preset: pinches must close tighter
    pub fn plane() -> Self {
        Self {
            pinch_distance: 0.03,
            ..Self::default()
        }
    }
}
