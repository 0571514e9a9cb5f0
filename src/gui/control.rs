//! GUI controls.

use raylib::prelude::Rectangle;

/// Handle of a control inside a [`GuiCanvas`](crate::gui::canvas::GuiCanvas).
///
/// Ids are never reused by a canvas, so a handle kept across
/// [`clear`](crate::gui::canvas::GuiCanvas::clear) simply stops matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub(crate) u32);

#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Static text; ignores the pointer.
    Label { text: String },
    /// Clickable; activation is reported through the canvas click queue.
    Button { text: String },
    /// Single line text entry limited to `max_len` characters.
    TextBox { text: String, max_len: usize },
}

#[derive(Debug, Clone)]
pub struct Control {
    pub id: ControlId,
    pub name: String,
    pub bounds: Rectangle,
    pub kind: ControlKind,
    pub visible: bool,
    pub enabled: bool,
}

impl Control {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.bounds.x
            && x < self.bounds.x + self.bounds.width
            && y >= self.bounds.y
            && y < self.bounds.y + self.bounds.height
    }

    pub fn text(&self) -> &str {
        match &self.kind {
            ControlKind::Label { text }
            | ControlKind::Button { text }
            | ControlKind::TextBox { text, .. } => text,
        }
    }

    /// Buttons and text boxes take pointer input and focus.
    pub fn is_interactive(&self) -> bool {
        !matches!(self.kind, ControlKind::Label { .. })
    }

    pub fn is_button(&self) -> bool {
        matches!(self.kind, ControlKind::Button { .. })
    }

    pub fn is_text_box(&self) -> bool {
        matches!(self.kind, ControlKind::TextBox { .. })
    }
}
