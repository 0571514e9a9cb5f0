//! Input systems.
//!
//! [`poll_input`] reads hardware input from raylib once per frame and writes
//! one [`InputEvent`] message per change. Held keys and buttons are tracked in
//! [`InputState`] so releases and mouse motion can be reported too.
use bevy_ecs::prelude::*;
use log::trace;
use raylib::prelude::{MouseButton, Vector2};

use crate::events::input::InputEvent;
use crate::resources::input::InputState;

const MOUSE_BUTTONS: [MouseButton; 3] = [
    MouseButton::MOUSE_BUTTON_LEFT,
    MouseButton::MOUSE_BUTTON_RIGHT,
    MouseButton::MOUSE_BUTTON_MIDDLE,
];

/// Poll raylib and emit input messages.
///
/// Order within a frame: mouse motion, buttons, wheel, key presses, key
/// releases, text characters.
pub fn poll_input(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    mut input: ResMut<InputState>,
    mut writer: MessageWriter<InputEvent>,
) {
    let position = rl.get_mouse_position();
    if input.move_mouse(position) {
        writer.write(InputEvent::MouseMoved {
            x: position.x,
            y: position.y,
        });
    }
    let Vector2 { x, y } = position;

    for button in MOUSE_BUTTONS {
        if rl.is_mouse_button_pressed(button) && input.press_button(button) {
            writer.write(InputEvent::MouseButtonPressed { button, x, y });
        }
        if rl.is_mouse_button_released(button) && input.release_button(button) {
            writer.write(InputEvent::MouseButtonReleased { button, x, y });
        }
    }

    let wheel = rl.get_mouse_wheel_move();
    if wheel != 0.0 {
        writer.write(InputEvent::MouseWheelMoved { delta: wheel });
    }

    while let Some(key) = rl.get_key_pressed() {
        if input.press_key(key) {
            writer.write(InputEvent::KeyPressed(key));
        }
    }

    let released: Vec<_> = input
        .held_keys()
        .iter()
        .copied()
        .filter(|key| rl.is_key_released(*key))
        .collect();
    for key in released {
        input.release_key(key);
        writer.write(InputEvent::KeyReleased(key));
    }

    while let Some(ch) = rl.get_char_pressed() {
        trace!("poll_input: char {:?}", ch);
        writer.write(InputEvent::TextEntered(ch));
    }
}
