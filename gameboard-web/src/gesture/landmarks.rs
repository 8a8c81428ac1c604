//! Hand landmark storage
//!
//! Receives the tracker's 21 hand keypoints for one frame. Coordinates are
//! in the tracker's normalized image space (roughly 0-1 per axis), each
//! point carries the tracker's confidence.

use serde::{Deserialize, Serialize};

use crate::error::{GameBoardError, Result};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const HAND_LANDMARK_COUNT: usize = 21;

/// Floats per landmark in the host buffer: x, y, confidence
pub const LANDMARK_STRIDE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandJoint {
    Wrist,
    ThumbCmc,
    ThumbMp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    LittleMcp,
    LittlePip,
    LittleDip,
    LittleTip,
}

impl HandJoint {
    pub const ALL: [HandJoint; HAND_LANDMARK_COUNT] = [
        HandJoint::Wrist,
        HandJoint::ThumbCmc, HandJoint::ThumbMp, HandJoint::ThumbIp, HandJoint::ThumbTip,
        HandJoint::IndexMcp, HandJoint::IndexPip, HandJoint::IndexDip, HandJoint::IndexTip,
        HandJoint::MiddleMcp, HandJoint::MiddlePip, HandJoint::MiddleDip, HandJoint::MiddleTip,
        HandJoint::RingMcp, HandJoint::RingPip, HandJoint::RingDip, HandJoint::RingTip,
        HandJoint::LittleMcp, HandJoint::LittlePip, HandJoint::LittleDip, HandJoint::LittleTip,
    ];

    /// Position in the host buffer
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

impl Finger {
    /// Thumb to little finger, so neighbours in this array are adjacent on the hand
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Little,
    ];

    pub fn tip(self) -> HandJoint {
        match self {
            Finger::Thumb => HandJoint::ThumbTip,
            Finger::Index => HandJoint::IndexTip,
            Finger::Middle => HandJoint::MiddleTip,
            Finger::Ring => HandJoint::RingTip,
            Finger::Little => HandJoint::LittleTip,
        }
    }

    /// Joint the tip is measured against to decide extended vs curled.
    /// The thumb has no MCP in the tracker's model, its MP joint stands in.
    pub fn base(self) -> HandJoint {
        match self {
            Finger::Thumb => HandJoint::ThumbMp,
            Finger::Index => HandJoint::IndexMcp,
            Finger::Middle => HandJoint::MiddleMcp,
            Finger::Ring => HandJoint::RingMcp,
            Finger::Little => HandJoint::LittleMcp,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Little => "little",
        }
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single tracked keypoint
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandPoint {
    pub x: f32,
    pub y: f32,
    /// 0-1, as reported by the tracker
    pub confidence: f32,
}

impl HandPoint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn distance_to(&self, other: &HandPoint) -> f32 {
        distance(self.position(), other.position())
    }
}

/// Euclidean distance in normalized image space
pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// One frame's hand. Joints the tracker did not report are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandPose {
    points: [Option<HandPoint>; HAND_LANDMARK_COUNT],
}

impl HandPose {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder used by tests and by hosts that assemble poses by name
    pub fn with(mut self, joint: HandJoint, point: HandPoint) -> Self {
        self.points[joint.index()] = Some(point);
        self
    }

    /// Parse a flat `[x, y, confidence] * 21` buffer.
    ///
    /// A negative confidence or a non-finite coordinate marks that joint
    /// as not tracked; the rest of the hand is kept.
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        let expected = HAND_LANDMARK_COUNT * LANDMARK_STRIDE;
        if data.len() != expected {
            return Err(GameBoardError::LandmarkBufferLength {
                expected,
                actual: data.len(),
            });
        }

        let mut pose = Self::empty();
        for (slot, chunk) in pose.points.iter_mut().zip(data.chunks_exact(LANDMARK_STRIDE)) {
            let (x, y, confidence) = (chunk[0], chunk[1], chunk[2]);
            if x.is_finite() && y.is_finite() && confidence >= 0.0 {
                *slot = Some(HandPoint::new(x, y, confidence));
            }
        }
        Ok(pose)
    }

    pub fn get(&self, joint: HandJoint) -> Option<&HandPoint> {
        self.points[joint.index()].as_ref()
    }

    /// Number of tracked joints
    pub fn tracked(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked() == 0
    }
}
