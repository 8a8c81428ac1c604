//! Hand landmark storage and gesture queries
//!
//! JS pushes the tracker output once per frame, then asks for whichever
//! gestures the current screen cares about. Only the first hand is
//! classified.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::error::{GameBoardError, Result};
use crate::gesture::{
    Finger, Gesture, GestureClassifier, GestureThresholds, HandPose, HAND_LANDMARK_COUNT,
};
use crate::gesture::landmarks::LANDMARK_STRIDE;

const FLOATS_PER_HAND: usize = HAND_LANDMARK_COUNT * LANDMARK_STRIDE;

// ============================================================================
// STATE
// ============================================================================

#[derive(Default)]
struct HandState {
    pose: Option<HandPose>,
    classifier: GestureClassifier,
}

thread_local! {
    static HAND_STATE: RefCell<HandState> = RefCell::new(HandState::default());
}

/// First hand of a `[x, y, confidence] * 21 * num_hands` buffer
fn parse_first_hand(flat_data: &[f32], num_hands: usize) -> Result<Option<HandPose>> {
    if num_hands == 0 {
        return Ok(None);
    }
    let expected = FLOATS_PER_HAND.checked_mul(num_hands);
    if expected != Some(flat_data.len()) {
        return Err(GameBoardError::LandmarkBufferLength {
            expected: expected.unwrap_or(usize::MAX),
            actual: flat_data.len(),
        });
    }
    HandPose::from_flat(&flat_data[..FLOATS_PER_HAND]).map(Some)
}

pub(crate) fn store_hand_landmarks(flat_data: &[f32], num_hands: usize) -> Result<()> {
    let pose = parse_first_hand(flat_data, num_hands)?;
    HAND_STATE.with(|state_cell| {
        state_cell.borrow_mut().pose = pose;
    });
    Ok(())
}

/// Run `f` against the current hand, `default` when there is none
fn with_hand<T>(default: T, f: impl FnOnce(&GestureClassifier, &HandPose) -> T) -> T {
    HAND_STATE.with(|state_cell| {
        let state = state_cell.borrow();
        match &state.pose {
            Some(pose) => f(&state.classifier, pose),
            None => default,
        }
    })
}

pub(crate) fn set_classifier_thresholds(thresholds: GestureThresholds) {
    HAND_STATE.with(|state_cell| {
        state_cell.borrow_mut().classifier.set_thresholds(thresholds);
    });
}

pub(crate) fn classifier_thresholds() -> GestureThresholds {
    HAND_STATE.with(|state_cell| state_cell.borrow().classifier.thresholds().clone())
}

// ============================================================================
// WASM API
// ============================================================================

/// Replace the current hand. `num_hands == 0` clears it.
#[wasm_bindgen]
pub fn apply_hand_landmarks(flat_data: &[f32], num_hands: usize) -> std::result::Result<(), JsValue> {
    store_hand_landmarks(flat_data, num_hands).map_err(|err| {
        log::warn!("dropping hand frame: {}", err);
        JsValue::from(err)
    })
}

/// Single-label gesture code, see `Gesture::code`
#[wasm_bindgen]
pub fn detect_gesture() -> u32 {
    current_gesture().code()
}

#[wasm_bindgen]
pub fn gesture_name() -> String {
    current_gesture().name().to_string()
}

/// `finger`: 1 index, 2 middle, 3 ring, 4 little. Thumb and unknown
/// indices never pinch.
#[wasm_bindgen]
pub fn detect_pinch(finger: u32) -> bool {
    let Some(finger) = Finger::from_index(finger) else {
        return false;
    };
    with_hand(false, |classifier, pose| classifier.detect_pinch(pose, finger))
}

#[wasm_bindgen]
pub fn detect_open_hand() -> bool {
    with_hand(false, |classifier, pose| classifier.detect_open_hand(pose))
}

#[wasm_bindgen]
pub fn detect_closed_hand() -> bool {
    with_hand(false, |classifier, pose| classifier.detect_closed_hand(pose))
}

#[wasm_bindgen]
pub fn detect_thumbs_up() -> bool {
    with_hand(false, |classifier, pose| classifier.detect_thumbs_up(pose))
}

#[wasm_bindgen]
pub fn detect_victory() -> bool {
    with_hand(false, |classifier, pose| classifier.detect_victory(pose))
}

/// Partial JSON is filled from the defaults
#[wasm_bindgen]
pub fn set_thresholds_json(json: &str) -> std::result::Result<(), JsValue> {
    let thresholds: GestureThresholds = serde_json::from_str(json).map_err(|err| {
        log::warn!("rejecting gesture thresholds: {}", err);
        JsValue::from(GameBoardError::from(err))
    })?;
    set_classifier_thresholds(thresholds);
    Ok(())
}

#[wasm_bindgen]
pub fn thresholds_json() -> std::result::Result<String, JsValue> {
    serde_json::to_string(&classifier_thresholds()).map_err(|err| JsValue::from(GameBoardError::from(err)))
}

// ============================================================================
// INTERNAL API
// ============================================================================

pub fn current_gesture() -> Gesture {
    with_hand(Gesture::Unknown, |classifier, pose| classifier.detect_gesture(pose))
}

/// Clone of the current hand for the game session
pub fn current_hand_pose() -> Option<HandPose> {
    HAND_STATE.with(|state_cell| state_cell.borrow().pose.clone())
}
