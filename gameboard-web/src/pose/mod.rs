//! Body and face classifiers
//!
//! Same shape as the hand classifier: tracked scores in, discrete labels out.

pub mod body;
pub mod face;

pub use body::{BodyPose, LimbEvent, LimbTriggers};
pub use face::{classify_expression, BlendShapes, Expression};
