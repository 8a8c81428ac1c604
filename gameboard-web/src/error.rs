//! Errors raised at the host boundary
//!
//! Classification itself never fails: a missing or low-confidence landmark
//! is a negative result. Only malformed input coming from the host (buffer
//! sizes, names, JSON) is reported as an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameBoardError {
    #[error("invalid landmark buffer length: {actual} (expected {expected})")]
    LandmarkBufferLength { expected: usize, actual: usize },

    #[error("unknown game: {0}")]
    UnknownGame(String),

    #[error("unknown contact category: {0}")]
    UnknownCategory(String),

    #[error("unknown control button: {0}")]
    UnknownButton(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid {kind} frame: {source}")]
    Frame {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameBoardError>;

impl From<GameBoardError> for wasm_bindgen::JsValue {
    fn from(err: GameBoardError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
