//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const VIEWER_KEYS: [KeyCode; 4] = [KeyCode::Space, KeyCode::Equal, KeyCode::Minus, KeyCode::T];

pub fn capture_keys_pressed() -> Vec<KeyCode> {
    VIEWER_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect()
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
