//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod game_session;
mod hand_landmarks;

pub use hand_landmarks::{
    // WASM entry points
    apply_hand_landmarks,
    detect_closed_hand,
    detect_gesture,
    detect_open_hand,
    detect_pinch,
    detect_thumbs_up,
    detect_victory,
    gesture_name,
    set_thresholds_json,
    thresholds_json,
    // Internal API
    current_gesture,
    current_hand_pose,
};

pub use game_session::{
    // WASM entry points
    body_frame,
    camera,
    configure,
    contact,
    current_game,
    face_frame,
    hand_frame,
    node_rotation,
    press_button,
    select_game,
    select_node,
    take_commands,
    tap,
    tick,
    tilt,
    // Internal API
    GameSession,
};
