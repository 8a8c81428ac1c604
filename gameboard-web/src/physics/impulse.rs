//! Force vectors handed to the host physics engine

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Instantaneous impulse in scene units, serialized as `[x, y, z]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Impulse(pub Vector3<f32>);

impl Impulse {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn zero() -> Self {
        Self(Vector3::zeros())
    }

    /// Impulse of `strength` along `direction`
    pub fn along(direction: Vector3<f32>, strength: f32) -> Self {
        Self(direction * strength)
    }

    pub fn vector(&self) -> Vector3<f32> {
        self.0
    }

    pub fn magnitude(&self) -> f32 {
        self.0.norm()
    }
}

impl From<Vector3<f32>> for Impulse {
    fn from(v: Vector3<f32>) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_along_scales_direction() {
        let impulse = Impulse::along(Vector3::new(0.0, 0.0, -1.0), 40.0);
        assert_relative_eq!(impulse.vector(), Vector3::new(0.0, 0.0, -40.0));
        assert_relative_eq!(impulse.magnitude(), 40.0);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&Impulse::new(0.0, 5.0, 0.0)).unwrap();
        assert_eq!(json, "[0.0,5.0,0.0]");
        assert_eq!(Impulse::zero().magnitude(), 0.0);
    }
}
