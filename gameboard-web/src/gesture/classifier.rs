//! Hand gesture classifier
//!
//! One set of geometric rules over a single frame's [`HandPose`]. Every
//! screen shares this classifier and differs only in the
//! [`GestureThresholds`] it is built with.
//!
//! Rules never error. A landmark that is missing, or that fails the rule's
//! confidence gate, makes the rule return `false` (or [`Gesture::Unknown`]).

use super::label::Gesture;
use super::landmarks::{distance, Finger, HandJoint, HandPoint, HandPose};
use super::thresholds::GestureThresholds;
use crate::physics::ConfidenceGate;

// ============================================================================
// LANDMARK READS
// ============================================================================

/// Which gate applies to which landmarks for one rule
#[derive(Clone, Copy, Debug)]
struct Gating {
    tips: ConfidenceGate,
    thumb_base: ConfidenceGate,
    bases: ConfidenceGate,
}

/// Tips and bases of all five fingers, read through a [`Gating`]
struct Hand {
    tips: [(f32, f32); 5],
    bases: [(f32, f32); 5],
}

impl Hand {
    fn read(pose: &HandPose, gating: Gating) -> Option<Self> {
        let mut tips = [(0.0, 0.0); 5];
        let mut bases = [(0.0, 0.0); 5];

        for finger in Finger::ALL {
            let base_gate = match finger {
                Finger::Thumb => gating.thumb_base,
                _ => gating.bases,
            };
            tips[finger.index()] = gating.tips.point(pose, finger.tip())?.position();
            bases[finger.index()] = base_gate.point(pose, finger.base())?.position();
        }

        Some(Self { tips, bases })
    }

    fn tip(&self, finger: Finger) -> (f32, f32) {
        self.tips[finger.index()]
    }

    /// Tip to base distance, small when the finger is curled
    fn reach(&self, finger: Finger) -> f32 {
        distance(self.tips[finger.index()], self.bases[finger.index()])
    }

    fn tip_gap(&self, a: Finger, b: Finger) -> f32 {
        distance(self.tip(a), self.tip(b))
    }
}

const FOUR_FINGERS: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Little];

// ============================================================================
// CLASSIFIER
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
}

impl GestureClassifier {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: GestureThresholds) {
        self.thresholds = thresholds;
    }

    fn floor(&self) -> ConfidenceGate {
        ConfidenceGate::new(self.thresholds.confidence_floor)
    }

    /// Tips gated, bases only need to be tracked
    fn tips_gated(&self) -> Gating {
        Gating {
            tips: self.floor(),
            thumb_base: ConfidenceGate::open(),
            bases: ConfidenceGate::open(),
        }
    }

    /// Thumb tip touches `finger`'s tip. No confidence gate.
    pub fn detect_pinch(&self, pose: &HandPose, finger: Finger) -> bool {
        if finger == Finger::Thumb {
            return false;
        }
        let (Some(thumb), Some(other)) = (pose.get(HandJoint::ThumbTip), pose.get(finger.tip()))
        else {
            return false;
        };
        thumb.distance_to(other) < self.thresholds.pinch_distance
    }

    pub fn detect_pinch_gesture(&self, pose: &HandPose) -> bool {
        self.detect_pinch(pose, Finger::Index)
    }

    pub fn detect_pinch_with_middle(&self, pose: &HandPose) -> bool {
        self.detect_pinch(pose, Finger::Middle)
    }

    pub fn detect_pinch_with_ring(&self, pose: &HandPose) -> bool {
        self.detect_pinch(pose, Finger::Ring)
    }

    pub fn detect_pinch_with_little(&self, pose: &HandPose) -> bool {
        self.detect_pinch(pose, Finger::Little)
    }

    /// Every finger extended and neighbouring tips spread apart
    pub fn detect_open_hand(&self, pose: &HandPose) -> bool {
        let Some(hand) = Hand::read(pose, self.tips_gated()) else {
            return false;
        };
        let t = &self.thresholds;

        let extended = Finger::ALL.iter().all(|&f| hand.reach(f) > t.open_extension);
        let spread = Finger::ALL
            .windows(2)
            .all(|pair| hand.tip_gap(pair[0], pair[1]) > t.open_spread);

        extended && spread
    }

    /// Index, middle, ring and little curled onto their knuckles.
    /// The thumb is not looked at beyond the confidence gate.
    pub fn detect_closed_hand(&self, pose: &HandPose) -> bool {
        let Some(hand) = Hand::read(pose, self.tips_gated()) else {
            return false;
        };

        FOUR_FINGERS
            .iter()
            .all(|&f| hand.reach(f) < self.thresholds.closed_curl)
    }

    /// Thumb extended and above every other tip, the rest folded
    pub fn detect_thumbs_up(&self, pose: &HandPose) -> bool {
        let gating = Gating {
            tips: self.floor(),
            thumb_base: self.floor(),
            bases: self.floor(),
        };
        let Some(hand) = Hand::read(pose, gating) else {
            return false;
        };
        let t = &self.thresholds;

        let thumb_extended = hand.reach(Finger::Thumb) > t.thumb_extension;
        let folded = FOUR_FINGERS.iter().all(|&f| hand.reach(f) < t.fold_curl);
        // thumb tip must have the smallest y of all five tips
        let thumb_y = hand.tip(Finger::Thumb).1;
        let thumb_highest = FOUR_FINGERS.iter().all(|&f| thumb_y < hand.tip(f).1);

        thumb_extended && folded && thumb_highest
    }

    /// Index and middle extended and apart, the rest folded
    pub fn detect_victory(&self, pose: &HandPose) -> bool {
        let gating = Gating {
            tips: self.floor(),
            thumb_base: ConfidenceGate::open(),
            bases: self.floor(),
        };
        let Some(hand) = Hand::read(pose, gating) else {
            return false;
        };
        let t = &self.thresholds;

        let raised = [Finger::Index, Finger::Middle]
            .iter()
            .all(|&f| hand.reach(f) > t.victory_extension);
        let folded = [Finger::Thumb, Finger::Ring, Finger::Little]
            .iter()
            .all(|&f| hand.reach(f) < t.fold_curl);
        let apart = hand.tip_gap(Finger::Index, Finger::Middle) > t.victory_separation;

        raised && folded && apart
    }

    /// Single-label classification, first rule that holds wins:
    /// grip, open, like, unlike.
    pub fn detect_gesture(&self, pose: &HandPose) -> Gesture {
        let gate = ConfidenceGate::new(self.thresholds.label_confidence_floor);
        let read = |joint| gate.point(pose, joint).map(HandPoint::position);

        let (Some(thumb), Some(index), Some(middle), Some(_ring), Some(_little), Some(wrist)) = (
            read(HandJoint::ThumbTip),
            read(HandJoint::IndexTip),
            read(HandJoint::MiddleTip),
            read(HandJoint::RingTip),
            read(HandJoint::LittleTip),
            read(HandJoint::Wrist),
        ) else {
            return Gesture::Unknown;
        };
        let t = &self.thresholds;

        if distance(thumb, index) < t.label_grip_distance
            && distance(thumb, middle) < t.label_grip_distance
        {
            Gesture::ClosedHand
        } else if distance(thumb, wrist) > t.label_open_distance {
            Gesture::OpenHand
        } else if thumb.1 < index.1 && index.1 < middle.1 {
            Gesture::Like
        } else if thumb.1 > index.1 && index.1 > middle.1 {
            Gesture::Unlike
        } else {
            Gesture::Unknown
        }
    }

    /// Whether `gesture` holds for this pose.
    ///
    /// `Like` and `Unlike` only exist as single-label outcomes, so they are
    /// answered by [`Self::detect_gesture`].
    pub fn detect(&self, pose: &HandPose, gesture: Gesture) -> bool {
        match gesture {
            Gesture::ClosedHand => self.detect_closed_hand(pose),
            Gesture::OpenHand => self.detect_open_hand(pose),
            Gesture::Pinch(finger) => self.detect_pinch(pose, finger),
            Gesture::ThumbsUp => self.detect_thumbs_up(pose),
            Gesture::Victory => self.detect_victory(pose),
            Gesture::Like | Gesture::Unlike => self.detect_gesture(pose) == gesture,
            Gesture::Unknown => false,
        }
    }

    /// First gesture of `order` that holds, else `Unknown`
    pub fn first_match(&self, pose: &HandPose, order: &[Gesture]) -> Gesture {
        order
            .iter()
            .copied()
            .find(|&gesture| self.detect(pose, gesture))
            .unwrap_or(Gesture::Unknown)
    }
}
