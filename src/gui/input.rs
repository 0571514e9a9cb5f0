//! GUI input adapter.
//!
//! [`GuiInput`] translates raw [`InputEvent`]s into canvas state changes
//! (hover, focus, clicks, text edits) and reports whether the GUI consumed
//! each event. Callers use that result to decide if the event should still
//! reach game logic.
//!
//! Consumption rules:
//! - Pointer events are consumed while the pointer is over an interactive
//!   control, or while a press that started on one is still held.
//! - Key and text events are consumed only when keyboard input is enabled on
//!   the canvas and a control has focus. A focused text box swallows every
//!   key; a focused button only reacts to Enter, Space and Escape.

use log::trace;
use raylib::prelude::{KeyboardKey, MouseButton};

use crate::events::input::InputEvent;
use crate::gui::canvas::GuiCanvas;
use crate::gui::control::{ControlId, ControlKind};

#[derive(Debug, Clone, Default)]
pub struct GuiInput {
    pointer: (f32, f32),
}

impl GuiInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pointer position seen by the adapter.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    /// Forget pointer state, e.g. when the owning state is left.
    pub fn reset(&mut self) {
        self.pointer = (0.0, 0.0);
    }

    /// Apply `event` to `canvas`. Returns `true` if the GUI consumed it.
    pub fn process(&mut self, canvas: &mut GuiCanvas, event: &InputEvent) -> bool {
        let handled = match *event {
            InputEvent::MouseMoved { x, y } => self.mouse_moved(canvas, x, y),
            InputEvent::MouseWheelMoved { .. } => canvas.hovered().is_some(),
            InputEvent::MouseButtonPressed { button, x, y } => {
                self.mouse_moved(canvas, x, y);
                Self::button_pressed(canvas, button, x, y)
            }
            InputEvent::MouseButtonReleased { button, x, y } => {
                self.mouse_moved(canvas, x, y);
                Self::button_released(canvas, button, x, y)
            }
            InputEvent::KeyPressed(key) => Self::key_pressed(canvas, key),
            InputEvent::KeyReleased(_) => {
                canvas.keyboard_input_enabled
                    && canvas.focused_control().is_some_and(|c| c.is_text_box())
            }
            InputEvent::TextEntered(ch) => Self::text_entered(canvas, ch),
        };
        trace!("GuiInput: {:?} handled={}", event, handled);
        handled
    }

    fn mouse_moved(&mut self, canvas: &mut GuiCanvas, x: f32, y: f32) -> bool {
        self.pointer = (x, y);
        let hit = canvas.control_at(x, y);
        canvas.set_hovered(hit);
        hit.is_some() || canvas.pressed().is_some()
    }

    fn button_pressed(canvas: &mut GuiCanvas, button: MouseButton, x: f32, y: f32) -> bool {
        let Some(id) = canvas.control_at(x, y) else {
            if button == MouseButton::MOUSE_BUTTON_LEFT {
                canvas.set_focus(None);
            }
            return false;
        };
        let enabled = canvas.control(id).is_some_and(|c| c.enabled);
        if button == MouseButton::MOUSE_BUTTON_LEFT && enabled {
            canvas.set_pressed(Some(id));
            canvas.set_focus(Some(id));
        }
        true
    }

    fn button_released(canvas: &mut GuiCanvas, button: MouseButton, x: f32, y: f32) -> bool {
        let over = canvas.control_at(x, y);
        if button != MouseButton::MOUSE_BUTTON_LEFT {
            return over.is_some();
        }
        let Some(pressed) = canvas.pressed() else {
            return over.is_some();
        };
        canvas.set_pressed(None);
        if over == Some(pressed) && canvas.control(pressed).is_some_and(|c| c.is_button()) {
            canvas.push_click(pressed);
        }
        true
    }

    fn key_pressed(canvas: &mut GuiCanvas, key: KeyboardKey) -> bool {
        if !canvas.keyboard_input_enabled {
            return false;
        }
        let Some(id) = canvas.focused() else {
            return false;
        };
        let is_button = match canvas.control(id) {
            Some(c) if c.enabled => c.is_button(),
            _ => return false,
        };

        if key == KeyboardKey::KEY_ESCAPE {
            canvas.set_focus(None);
            return true;
        }
        if is_button {
            return match key {
                KeyboardKey::KEY_ENTER | KeyboardKey::KEY_SPACE => {
                    canvas.push_click(id);
                    true
                }
                _ => false,
            };
        }

        match key {
            KeyboardKey::KEY_BACKSPACE => Self::edit_text(canvas, id, |text, _| {
                text.pop();
            }),
            KeyboardKey::KEY_ENTER => canvas.push_click(id),
            _ => {}
        }
        true
    }

    fn text_entered(canvas: &mut GuiCanvas, ch: char) -> bool {
        if !canvas.keyboard_input_enabled || ch.is_control() {
            return false;
        }
        let Some(id) = canvas.focused() else {
            return false;
        };
        if !canvas.control(id).is_some_and(|c| c.is_text_box() && c.enabled) {
            return false;
        }
        Self::edit_text(canvas, id, |text, max_len| {
            if text.chars().count() < max_len {
                text.push(ch);
            }
        });
        true
    }

    fn edit_text(canvas: &mut GuiCanvas, id: ControlId, edit: impl FnOnce(&mut String, usize)) {
        if let Some(control) = canvas.control_mut(id) {
            if let ControlKind::TextBox { text, max_len } = &mut control.kind {
                edit(text, *max_len);
            }
        }
    }
}
