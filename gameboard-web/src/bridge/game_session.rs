//! Game session - the selected mini-game and its pending scene commands
//!
//! JS forwards input events as they happen and drains the accumulated
//! commands once per frame with `take_commands`.

use std::cell::RefCell;

use nalgebra::Vector3;
use wasm_bindgen::prelude::*;

use super::hand_landmarks::{current_hand_pose, set_classifier_thresholds};
use crate::config::GameBoardConfig;
use crate::error::{GameBoardError, Result};
use crate::games::{create_game, ControlButton, GameController, GameKind, SceneCommand};
use crate::gesture::HandPose;
use crate::physics::{Contact, ContactBody, ContactCategory, Tilt};
use crate::pose::{BlendShapes, BodyPose};

// ============================================================================
// SESSION
// ============================================================================

pub struct GameSession {
    config: GameBoardConfig,
    game: Option<Box<dyn GameController>>,
    pending: Vec<SceneCommand>,
}

impl GameSession {
    pub fn new(config: GameBoardConfig) -> Self {
        Self {
            config,
            game: None,
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameBoardConfig {
        &self.config
    }

    /// Applies to games selected afterwards
    pub fn set_config(&mut self, config: GameBoardConfig) {
        self.config = config;
    }

    pub fn game_name(&self) -> Option<&'static str> {
        self.game.as_ref().map(|game| game.name())
    }

    /// Replace the running game. Commands of the old game not yet taken
    /// are dropped.
    pub fn select_game(&mut self, name: &str, seed: u64) -> Result<()> {
        let kind = GameKind::from_name(name)?;
        let mut game = create_game(kind, &self.config, seed);
        self.pending = game.start();
        self.game = Some(game);
        log::info!("selected game {}", kind.name());
        Ok(())
    }

    fn dispatch(&mut self, event: impl FnOnce(&mut dyn GameController) -> Vec<SceneCommand>) {
        match self.game.as_mut() {
            Some(game) => {
                let commands = event(game.as_mut());
                self.pending.extend(commands);
            }
            None => log::debug!("input with no game selected"),
        }
    }

    pub fn hand_frame(&mut self, pose: Option<&HandPose>) {
        self.dispatch(|game| game.on_hand_pose(pose));
    }

    pub fn tilt(&mut self, x: f32, z: f32) {
        let tilt = Tilt::classify(x, z);
        log::trace!("tilt {}", tilt.name());
        self.dispatch(|game| game.on_tilt(tilt));
    }

    pub fn tap(&mut self) {
        self.dispatch(|game| game.on_tap());
    }

    pub fn contact(&mut self, category_a: &str, category_b: &str, node_a: &str, node_b: &str) -> Result<()> {
        let contact = Contact::new(
            ContactBody::new(node_a, ContactCategory::from_name(category_a)?),
            ContactBody::new(node_b, ContactCategory::from_name(category_b)?),
        );
        self.dispatch(|game| game.on_contact(&contact));
        Ok(())
    }

    pub fn node_rotation(&mut self, node: &str, radians: f32) {
        self.dispatch(|game| game.on_node_rotation(node, radians));
    }

    pub fn camera(&mut self, position: Vector3<f32>, forward: Vector3<f32>) {
        self.dispatch(|game| game.on_camera(position, forward));
    }

    pub fn body_frame(&mut self, json: &str) -> Result<()> {
        let pose: BodyPose = serde_json::from_str(json)
            .map_err(|source| GameBoardError::Frame { kind: "body", source })?;
        self.dispatch(|game| game.on_body_pose(&pose));
        Ok(())
    }

    pub fn face_frame(&mut self, json: &str) -> Result<()> {
        let shapes: BlendShapes = serde_json::from_str(json)
            .map_err(|source| GameBoardError::Frame { kind: "face", source })?;
        self.dispatch(|game| game.on_blend_shapes(&shapes));
        Ok(())
    }

    pub fn press_button(&mut self, name: &str) -> Result<()> {
        let button = ControlButton::from_name(name)?;
        self.dispatch(|game| game.on_button(button));
        Ok(())
    }

    pub fn select_node(&mut self, node: &str) {
        self.dispatch(|game| game.on_node_selected(node));
    }

    pub fn tick(&mut self, now: f64) {
        self.dispatch(|game| game.tick(now));
    }

    pub fn take_commands(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.pending)
    }

    pub fn take_commands_json(&mut self) -> Result<String> {
        Ok(serde_json::to_string(&self.take_commands())?)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameBoardConfig::default())
    }
}

thread_local! {
    static SESSION: RefCell<GameSession> = RefCell::new(GameSession::default());
}

fn with_session<T>(f: impl FnOnce(&mut GameSession) -> T) -> T {
    SESSION.with(|session_cell| f(&mut session_cell.borrow_mut()))
}

fn to_js(err: GameBoardError) -> JsValue {
    log::warn!("{}", err);
    JsValue::from(err)
}

// ============================================================================
// WASM API
// ============================================================================

/// Load a configuration document: log level, shared and plane thresholds
#[wasm_bindgen]
pub fn configure(json: &str) -> std::result::Result<(), JsValue> {
    let config = GameBoardConfig::from_json(json).map_err(to_js)?;
    log::set_max_level(config.level_filter());
    set_classifier_thresholds(config.gestures.clone());
    with_session(|session| session.set_config(config));
    Ok(())
}

#[wasm_bindgen]
pub fn select_game(name: &str) -> std::result::Result<(), JsValue> {
    let seed = rand::random::<u64>();
    with_session(|session| session.select_game(name, seed)).map_err(to_js)
}

/// Feed the hand last stored by `apply_hand_landmarks` to the game
#[wasm_bindgen]
pub fn hand_frame() {
    let pose = current_hand_pose();
    with_session(|session| session.hand_frame(pose.as_ref()));
}

/// Accelerometer gravity components
#[wasm_bindgen]
pub fn tilt(x: f32, z: f32) {
    with_session(|session| session.tilt(x, z));
}

#[wasm_bindgen]
pub fn tap() {
    with_session(|session| session.tap());
}

#[wasm_bindgen]
pub fn contact(
    category_a: &str,
    category_b: &str,
    node_a: &str,
    node_b: &str,
) -> std::result::Result<(), JsValue> {
    with_session(|session| session.contact(category_a, category_b, node_a, node_b)).map_err(to_js)
}

#[wasm_bindgen]
pub fn node_rotation(node: &str, radians: f32) {
    with_session(|session| session.node_rotation(node, radians));
}

#[wasm_bindgen]
pub fn camera(px: f32, py: f32, pz: f32, fx: f32, fy: f32, fz: f32) {
    let position = Vector3::new(px, py, pz);
    let forward = Vector3::new(fx, fy, fz);
    with_session(|session| session.camera(position, forward));
}

/// `{ "joint_name": [x, y, z], ... }`
#[wasm_bindgen]
pub fn body_frame(json: &str) -> std::result::Result<(), JsValue> {
    with_session(|session| session.body_frame(json)).map_err(to_js)
}

/// `{ "blendShapeName": coefficient, ... }`
#[wasm_bindgen]
pub fn face_frame(json: &str) -> std::result::Result<(), JsValue> {
    with_session(|session| session.face_frame(json)).map_err(to_js)
}

#[wasm_bindgen]
pub fn press_button(name: &str) -> std::result::Result<(), JsValue> {
    with_session(|session| session.press_button(name)).map_err(to_js)
}

#[wasm_bindgen]
pub fn select_node(node: &str) {
    with_session(|session| session.select_node(node));
}

/// Host clock in seconds
#[wasm_bindgen]
pub fn tick(now: f64) {
    with_session(|session| session.tick(now));
}

/// JSON array of the commands accumulated since the last call
#[wasm_bindgen]
pub fn take_commands() -> std::result::Result<String, JsValue> {
    with_session(|session| session.take_commands_json()).map_err(to_js)
}

#[wasm_bindgen]
pub fn current_game() -> Option<String> {
    with_session(|session| session.game_name().map(str::to_string))
}
