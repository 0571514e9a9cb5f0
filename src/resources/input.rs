//! Per-frame raw input tracking.
//!
//! raylib reports key presses through a queue but releases only per key, so
//! [`InputState`] remembers which keys and mouse buttons are held. The
//! [`poll_input`](crate::systems::input::poll_input) system uses it to emit
//! release events and to detect mouse motion.
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton, Vector2};
use smallvec::SmallVec;

/// Resource capturing the raw input state between frames.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    held_keys: SmallVec<[KeyboardKey; 8]>,
    held_buttons: SmallVec<[MouseButton; 3]>,
    /// Last known mouse position in screen pixels.
    pub mouse_position: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            held_keys: SmallVec::new(),
            held_buttons: SmallVec::new(),
            mouse_position: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl InputState {
    /// Mark `key` as held. Returns `true` if it was not held before.
    pub fn press_key(&mut self, key: KeyboardKey) -> bool {
        if self.held_keys.contains(&key) {
            return false;
        }
        self.held_keys.push(key);
        true
    }

    /// Forget `key`. Returns `true` if it was held.
    pub fn release_key(&mut self, key: KeyboardKey) -> bool {
        match self.held_keys.iter().position(|k| *k == key) {
            Some(index) => {
                self.held_keys.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_key_held(&self, key: KeyboardKey) -> bool {
        self.held_keys.contains(&key)
    }

    pub fn held_keys(&self) -> &[KeyboardKey] {
        &self.held_keys
    }

    pub fn press_button(&mut self, button: MouseButton) -> bool {
        if self.held_buttons.contains(&button) {
            return false;
        }
        self.held_buttons.push(button);
        true
    }

    pub fn release_button(&mut self, button: MouseButton) -> bool {
        match self.held_buttons.iter().position(|b| *b == button) {
            Some(index) => {
                self.held_buttons.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_button_held(&self, button: MouseButton) -> bool {
        self.held_buttons.contains(&button)
    }

    /// Store a new mouse position. Returns `true` if it moved.
    pub fn move_mouse(&mut self, position: Vector2) -> bool {
        if position.x == self.mouse_position.x && position.y == self.mouse_position.y {
            return false;
        }
        self.mouse_position = position;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_nothing_held() {
        let input = InputState::default();
        assert!(input.held_keys().is_empty());
        assert!(!input.is_button_held(MouseButton::MOUSE_BUTTON_LEFT));
        assert_eq!(input.mouse_position.x, 0.0);
    }

    #[test]
    fn test_press_and_release_key() {
        let mut input = InputState::default();
        assert!(input.press_key(KeyboardKey::KEY_A));
        assert!(!input.press_key(KeyboardKey::KEY_A));
        assert!(input.is_key_held(KeyboardKey::KEY_A));
        assert!(input.release_key(KeyboardKey::KEY_A));
        assert!(!input.release_key(KeyboardKey::KEY_A));
        assert!(!input.is_key_held(KeyboardKey::KEY_A));
    }

    #[test]
    fn test_press_and_release_button() {
        let mut input = InputState::default();
        assert!(input.press_button(MouseButton::MOUSE_BUTTON_RIGHT));
        assert!(!input.press_button(MouseButton::MOUSE_BUTTON_RIGHT));
        assert!(input.release_button(MouseButton::MOUSE_BUTTON_RIGHT));
        assert!(!input.is_button_held(MouseButton::MOUSE_BUTTON_RIGHT));
    }

    #[test]
    fn test_move_mouse_reports_changes_only() {
        let mut input = InputState::default();
        assert!(!input.move_mouse(Vector2 { x: 0.0, y: 0.0 }));
        assert!(input.move_mouse(Vector2 { x: 3.0, y: 4.0 }));
        assert!(!input.move_mouse(Vector2 { x: 3.0, y: 4.0 }));
    }
}
