//! Runtime configuration pushed from the host as JSON
//!
//! Every field has a default, so a partial document (or `{}`) is valid and
//! missing values fall back to the tuned constants.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gesture::GestureThresholds;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameBoardConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Thresholds shared by every screen except the plane game
    pub gestures: GestureThresholds,
    /// The plane screen was tuned with a tighter pinch
    pub plane_gestures: GestureThresholds,
}

impl Default for GameBoardConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            gestures: GestureThresholds::default(),
            plane_gestures: GestureThresholds::plane(),
        }
    }
}

impl GameBoardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parsed log level, `Info` when the string is not recognised
    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.parse::<LevelFilter>() {
            Ok(level) => level,
            Err(_) => {
                log::warn!("Unknown log level {:?}, using info", self.log_level);
                LevelFilter::Info
            }
        }
    }
}
