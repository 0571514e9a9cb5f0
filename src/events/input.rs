//! Raw input events.
//!
//! [`InputEvent`] carries what the platform reported this frame, before any
//! game or GUI interpretation. The [`poll_input`](crate::systems::input::poll_input)
//! system writes them as messages and
//! [`dispatch_input`](crate::systems::statestack::dispatch_input) hands them
//! to the active state, which decides whether they were consumed.

use bevy_ecs::message::Message;
use raylib::prelude::{KeyboardKey, MouseButton};

/// One raw input occurrence. Mouse coordinates are in screen pixels.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A printable character was typed.
    TextEntered(char),
    /// The wheel turned; positive is away from the user.
    MouseWheelMoved { delta: f32 },
    MouseMoved { x: f32, y: f32 },
    MouseButtonPressed { button: MouseButton, x: f32, y: f32 },
    MouseButtonReleased { button: MouseButton, x: f32, y: f32 },
    KeyPressed(KeyboardKey),
    KeyReleased(KeyboardKey),
}

impl InputEvent {
    /// Whether the event comes from the mouse.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            InputEvent::MouseWheelMoved { .. }
                | InputEvent::MouseMoved { .. }
                | InputEvent::MouseButtonPressed { .. }
                | InputEvent::MouseButtonReleased { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pointer() {
        assert!(InputEvent::MouseMoved { x: 1.0, y: 2.0 }.is_pointer());
        assert!(InputEvent::MouseWheelMoved { delta: -1.0 }.is_pointer());
        assert!(!InputEvent::KeyPressed(KeyboardKey::KEY_A).is_pointer());
        assert!(!InputEvent::TextEntered('a').is_pointer());
    }
}
