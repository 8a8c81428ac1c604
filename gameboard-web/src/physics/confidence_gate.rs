//! Confidence Gate - first check every gesture rule runs
//!
//! When a landmark's confidence is not above the floor, the landmark is
//! treated as missing and the rule reading it fails closed.

use crate::gesture::{HandJoint, HandPoint, HandPose};

/// Confidence gate for landmark reads
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceGate {
    /// Minimum confidence (exclusive), `None` admits any tracked point
    threshold: Option<f32>,
}

impl ConfidenceGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: Some(threshold),
        }
    }

    /// Gate that only requires the landmark to be tracked
    pub fn open() -> Self {
        Self { threshold: None }
    }

    /// Set confidence threshold
    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = Some(threshold);
    }

    pub fn threshold(&self) -> Option<f32> {
        self.threshold
    }

    /// NaN confidence never passes a gate with a threshold
    pub fn admits(&self, point: &HandPoint) -> bool {
        match self.threshold {
            Some(threshold) => point.confidence > threshold,
            None => true,
        }
    }

    /// Read a landmark through the gate
    pub fn point<'a>(&self, pose: &'a HandPose, joint: HandJoint) -> Option<&'a HandPoint> {
        pose.get(joint).filter(|point| self.admits(point))
    }
}

impl Default for ConfidenceGate {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_with_wrist(confidence: f32) -> HandPose {
        HandPose::empty().with(HandJoint::Wrist, HandPoint::new(0.5, 0.5, confidence))
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let gate = ConfidenceGate::new(0.5);
        assert!(gate.point(&pose_with_wrist(0.5), HandJoint::Wrist).is_none());
        assert!(gate.point(&pose_with_wrist(0.51), HandJoint::Wrist).is_some());
    }

    #[test]
    fn test_open_gate_admits_zero_confidence() {
        let gate = ConfidenceGate::open();
        assert!(gate.point(&pose_with_wrist(0.0), HandJoint::Wrist).is_some());
        assert!(gate.point(&HandPose::empty(), HandJoint::Wrist).is_none());
    }

    #[test]
    fn test_nan_confidence_is_rejected() {
        let gate = ConfidenceGate::default();
        assert!(!gate.admits(&HandPoint::new(0.0, 0.0, f32::NAN)));
    }

    #[test]
    fn test_set_threshold() {
        let mut gate = ConfidenceGate::open();
        gate.set_threshold(0.3);
        assert_eq!(gate.threshold(), Some(0.3));
        assert!(!gate.admits(&HandPoint::new(0.0, 0.0, 0.2)));
    }
}
