//! Physics vocabulary shared with the host engine
//!
//! Re-exports only. All logic in submodules.

mod confidence_gate;
mod contact;
mod impulse;
mod tilt;

pub use confidence_gate::ConfidenceGate;
pub use contact::{reports_contact, Contact, ContactBody, ContactCategory, ContactMask, PhysicsTag};
pub use impulse::Impulse;
pub use tilt::Tilt;
