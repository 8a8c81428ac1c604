//! Gesture labels shared by the classifier, the games and the JS bridge

use serde::{Deserialize, Serialize};

use super::landmarks::Finger;

/// Numeric code base for pinches: `PINCH_CODE_BASE + finger.index()`
const PINCH_CODE_BASE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    ClosedHand,
    OpenHand,
    /// Thumb tip touching the given finger's tip
    Pinch(Finger),
    ThumbsUp,
    Victory,
    Like,
    Unlike,
    Unknown,
}

impl Gesture {
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::ClosedHand => "closed_hand",
            Gesture::OpenHand => "open_hand",
            Gesture::Pinch(Finger::Thumb) => "pinch_thumb",
            Gesture::Pinch(Finger::Index) => "pinch_index",
            Gesture::Pinch(Finger::Middle) => "pinch_middle",
            Gesture::Pinch(Finger::Ring) => "pinch_ring",
            Gesture::Pinch(Finger::Little) => "pinch_little",
            Gesture::ThumbsUp => "thumbs_up",
            Gesture::Victory => "victory",
            Gesture::Like => "like",
            Gesture::Unlike => "unlike",
            Gesture::Unknown => "unknown",
        }
    }

    /// Stable code handed across the wasm boundary
    pub fn code(&self) -> u32 {
        match self {
            Gesture::Unknown => 0,
            Gesture::ClosedHand => 1,
            Gesture::OpenHand => 2,
            Gesture::Like => 3,
            Gesture::Unlike => 4,
            Gesture::ThumbsUp => 5,
            Gesture::Victory => 6,
            Gesture::Pinch(finger) => PINCH_CODE_BASE + finger.index() as u32,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Gesture::Unknown),
            1 => Some(Gesture::ClosedHand),
            2 => Some(Gesture::OpenHand),
            3 => Some(Gesture::Like),
            4 => Some(Gesture::Unlike),
            5 => Some(Gesture::ThumbsUp),
            6 => Some(Gesture::Victory),
            c if c >= PINCH_CODE_BASE => Finger::from_index(c - PINCH_CODE_BASE).map(Gesture::Pinch),
            _ => None,
        }
    }
}

impl Default for Gesture {
    fn default() -> Self {
        Gesture::Unknown
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(Gesture::Unknown.code(), 0);
        assert_eq!(Gesture::ClosedHand.code(), 1);
        assert_eq!(Gesture::Pinch(Finger::Index).code(), 11);
        assert_eq!(Gesture::Pinch(Finger::Little).code(), 14);
    }

    #[test]
    fn test_code_lookup_covers_every_label() {
        let all = [
            Gesture::ClosedHand,
            Gesture::OpenHand,
            Gesture::ThumbsUp,
            Gesture::Victory,
            Gesture::Like,
            Gesture::Unlike,
            Gesture::Unknown,
            Gesture::Pinch(Finger::Index),
            Gesture::Pinch(Finger::Middle),
            Gesture::Pinch(Finger::Ring),
            Gesture::Pinch(Finger::Little),
        ];
        for gesture in all {
            assert_eq!(Gesture::from_code(gesture.code()), Some(gesture));
        }
        assert_eq!(Gesture::from_code(7), None);
        assert_eq!(Gesture::from_code(15), None);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Gesture::Pinch(Finger::Ring).to_string(), "pinch_ring");
        assert_eq!(Gesture::default().to_string(), "unknown");
    }
}
