//! Device tilt from accelerometer gravity components

use serde::{Deserialize, Serialize};

/// Side-to-side gravity component beyond which the device is tilted
pub const SIDE_TILT: f32 = 0.5;
/// Front-to-back gravity component beyond which the device is tilted
pub const PITCH_TILT: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tilt {
    Left,
    Right,
    Back,
    Forward,
    Level,
}

impl Tilt {
    /// Side tilt wins over pitch when both exceed their limits
    pub fn classify(x: f32, z: f32) -> Self {
        if x < -SIDE_TILT {
            Tilt::Left
        } else if x > SIDE_TILT {
            Tilt::Right
        } else if z > PITCH_TILT {
            Tilt::Back
        } else if z < -PITCH_TILT {
            Tilt::Forward
        } else {
            Tilt::Level
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tilt::Left => "left",
            Tilt::Right => "right",
            Tilt::Back => "back",
            Tilt::Forward => "forward",
            Tilt::Level => "level",
        }
    }
}
