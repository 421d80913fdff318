//! Keyboard, text, and mouse input collection for one rendered frame.

use macroquad::prelude::{
    KeyCode, MouseButton, get_char_pressed, is_key_pressed, is_mouse_button_pressed,
    mouse_position,
};
use maze_app::app_loop::FrameInput;

const ACTION_KEYS: [KeyCode; 11] = [
    KeyCode::R,
    KeyCode::S,
    KeyCode::E,
    KeyCode::A,
    KeyCode::D,
    KeyCode::Q,
    KeyCode::Space,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Escape,
    KeyCode::Backspace,
];

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();

    let mut chars_typed = Vec::new();
    while let Some(character) = get_char_pressed() {
        chars_typed.push(character);
    }

    let click = is_mouse_button_pressed(MouseButton::Left).then(mouse_position);

    FrameInput { keys_pressed, chars_typed, click }
}
