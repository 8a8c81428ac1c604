//! GameBoard Web - hand gesture classification and AR mini-game logic
//!
//! The host page owns the camera, the trackers, the scene graph and the
//! physics engine. This module turns tracked landmarks and scene events
//! into gestures and scene commands.
//!
//! - `gesture`: 21-keypoint hand classifier
//! - `pose`: body limb triggers and face expressions
//! - `physics`: contact categories, impulses, tilt, confidence gate
//! - `games`: one controller per mini-game
//! - `bridge`: wasm_bindgen entry points and per-page state

pub mod bridge;
pub mod config;
pub mod error;
pub mod games;
pub mod gesture;
pub mod physics;
pub mod pose;

use wasm_bindgen::prelude::*;

pub use config::GameBoardConfig;
pub use error::{GameBoardError, Result};
pub use games::{create_game, GameController, GameKind, SceneCommand};
pub use gesture::{Finger, Gesture, GestureClassifier, GestureThresholds, HandJoint, HandPoint, HandPose};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    {
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("console logger already set");
        }
    }

    log::info!("gameboard-web {} loaded", env!("CARGO_PKG_VERSION"));
}
