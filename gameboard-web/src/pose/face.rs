//! Facial expression from face blend-shape coefficients

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Blend-shape coefficients (0-1) keyed by the face tracker's shape names.
/// Missing shapes read as 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlendShapes {
    coefficients: HashMap<String, f32>,
}

impl BlendShapes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, shape: &str, value: f32) -> Self {
        self.coefficients.insert(shape.to_string(), value);
        self
    }

    pub fn get(&self, shape: &str) -> f32 {
        self.coefficients.get(shape).copied().unwrap_or(0.0)
    }

    /// Left plus right coefficient
    pub fn pair(&self, left: &str, right: &str) -> f32 {
        self.get(left) + self.get(right)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Smile,
    Surprise,
    Sadness,
    Kiss,
    Thinking,
    Wink,
    Neutral,
}

impl Expression {
    /// Every expression except `Neutral`, in emoji tray order
    pub const MATCHABLE: [Expression; 6] = [
        Expression::Smile,
        Expression::Surprise,
        Expression::Sadness,
        Expression::Kiss,
        Expression::Thinking,
        Expression::Wink,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            Expression::Smile => "😊",
            Expression::Surprise => "😲",
            Expression::Sadness => "😢",
            Expression::Kiss => "😘",
            Expression::Thinking => "🤔",
            Expression::Wink => "😉",
            Expression::Neutral => "",
        }
    }
}

const EXPRESSION_THRESHOLD: f32 = 0.5;
const BLINK_THRESHOLD: f32 = 0.8;

/// First expression whose score clears its threshold
pub fn classify_expression(shapes: &BlendShapes) -> Expression {
    if shapes.pair("mouthSmileLeft", "mouthSmileRight") > EXPRESSION_THRESHOLD {
        Expression::Smile
    } else if shapes.get("jawOpen") > EXPRESSION_THRESHOLD {
        Expression::Surprise
    } else if shapes.pair("mouthFrownLeft", "mouthFrownRight") > EXPRESSION_THRESHOLD {
        Expression::Sadness
    } else if shapes.get("mouthPucker") > EXPRESSION_THRESHOLD {
        Expression::Kiss
    } else if shapes.pair("eyeSquintLeft", "eyeSquintRight") > EXPRESSION_THRESHOLD {
        Expression::Thinking
    } else if shapes.pair("eyeBlinkLeft", "eyeBlinkRight") > BLINK_THRESHOLD {
        Expression::Wink
    } else {
        Expression::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_face() {
        assert_eq!(classify_expression(&BlendShapes::new()), Expression::Neutral);
    }

    #[test]
    fn test_sides_are_summed() {
        let shapes = BlendShapes::new()
            .with("mouthSmileLeft", 0.3)
            .with("mouthSmileRight", 0.3);
        assert_eq!(classify_expression(&shapes), Expression::Smile);
    }

    #[test]
    fn test_priority_order() {
        let shapes = BlendShapes::new()
            .with("jawOpen", 0.9)
            .with("mouthPucker", 0.9)
            .with("eyeBlinkLeft", 1.0);
        assert_eq!(classify_expression(&shapes), Expression::Surprise);

        let shapes = BlendShapes::new().with("mouthPucker", 0.9).with("eyeBlinkLeft", 1.0);
        assert_eq!(classify_expression(&shapes), Expression::Kiss);
    }

    #[test]
    fn test_blink_needs_higher_score() {
        let shapes = BlendShapes::new()
            .with("eyeBlinkLeft", 0.4)
            .with("eyeBlinkRight", 0.3);
        assert_eq!(classify_expression(&shapes), Expression::Neutral);
        let shapes = shapes.with("eyeBlinkRight", 0.5);
        assert_eq!(classify_expression(&shapes), Expression::Wink);
    }

    #[test]
    fn test_from_json() {
        let shapes: BlendShapes = serde_json::from_str(r#"{"jawOpen":0.7}"#).unwrap();
        assert_eq!(shapes.get("jawOpen"), 0.7);
        assert_eq!(shapes.get("mouthPucker"), 0.0);
    }
}
