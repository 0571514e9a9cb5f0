//! Root GUI container.
//!
//! A [`GuiCanvas`] covers the whole screen and holds every control of one
//! game state. It is retained: controls are added once by a layout and then
//! mutated by the [`GuiInput`](crate::gui::input::GuiInput) adapter as input
//! arrives. Button activations are queued and drained with
//! [`GuiCanvas::take_clicks`].

use log::debug;
use raylib::prelude::Rectangle;

use crate::gui::control::{Control, ControlId, ControlKind};
use crate::gui::skin::GuiSkin;

#[derive(Debug, Clone)]
pub struct GuiCanvas {
    skin: GuiSkin,
    width: i32,
    height: i32,
    /// Fill the whole canvas with the skin background before drawing controls.
    pub draw_background: bool,
    /// Whether key and text events reach focused controls.
    pub keyboard_input_enabled: bool,
    controls: Vec<Control>,
    next_id: u32,
    hovered: Option<ControlId>,
    focused: Option<ControlId>,
    pressed: Option<ControlId>,
    clicks: Vec<ControlId>,
}

impl GuiCanvas {
    pub fn new(skin: GuiSkin, width: i32, height: i32) -> Self {
        Self {
            skin,
            width,
            height,
            draw_background: true,
            keyboard_input_enabled: false,
            controls: Vec::new(),
            next_id: 0,
            hovered: None,
            focused: None,
            pressed: None,
            clicks: Vec::new(),
        }
    }

    pub fn skin(&self) -> &GuiSkin {
        &self.skin
    }

    pub fn skin_mut(&mut self) -> &mut GuiSkin {
        &mut self.skin
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn push(&mut self, name: impl Into<String>, bounds: Rectangle, kind: ControlKind) -> ControlId {
        let id = ControlId(self.next_id);
        self.next_id += 1;
        self.controls.push(Control {
            id,
            name: name.into(),
            bounds,
            kind,
            visible: true,
            enabled: true,
        });
        id
    }

    pub fn add_label(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
        bounds: Rectangle,
    ) -> ControlId {
        self.push(name, bounds, ControlKind::Label { text: text.into() })
    }

    pub fn add_button(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
        bounds: Rectangle,
    ) -> ControlId {
        self.push(name, bounds, ControlKind::Button { text: text.into() })
    }

    pub fn add_text_box(
        &mut self,
        name: impl Into<String>,
        bounds: Rectangle,
        max_len: usize,
    ) -> ControlId {
        self.push(
            name,
            bounds,
            ControlKind::TextBox {
                text: String::new(),
                max_len,
            },
        )
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id == id)
    }

    /// First control registered under `name`.
    pub fn find(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.name == name)
    }

    pub fn id_of(&self, name: &str) -> Option<ControlId> {
        self.find(name).map(|c| c.id)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.find(name).map(Control::text)
    }

    /// Replace the text of a control. Text boxes truncate to their limit.
    pub fn set_text(&mut self, id: ControlId, value: &str) -> bool {
        let Some(control) = self.control_mut(id) else {
            return false;
        };
        match &mut control.kind {
            ControlKind::Label { text } | ControlKind::Button { text } => {
                *text = value.to_string();
            }
            ControlKind::TextBox { text, max_len } => {
                *text = value.chars().take(*max_len).collect();
            }
        }
        true
    }

    /// Topmost visible interactive control under the point.
    pub fn control_at(&self, x: f32, y: f32) -> Option<ControlId> {
        self.controls
            .iter()
            .rev()
            .find(|c| c.visible && c.is_interactive() && c.contains(x, y))
            .map(|c| c.id)
    }

    pub fn hovered(&self) -> Option<ControlId> {
        self.hovered
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    pub fn pressed(&self) -> Option<ControlId> {
        self.pressed
    }

    pub fn focused_control(&self) -> Option<&Control> {
        self.focused.and_then(|id| self.control(id))
    }

    pub(crate) fn set_hovered(&mut self, id: Option<ControlId>) {
        self.hovered = id;
    }

    pub fn set_focus(&mut self, id: Option<ControlId>) {
        if self.focused != id {
            debug!("GuiCanvas: focus {:?} -> {:?}", self.focused, id);
        }
        self.focused = id;
    }

    pub(crate) fn set_pressed(&mut self, id: Option<ControlId>) {
        self.pressed = id;
    }

    pub(crate) fn push_click(&mut self, id: ControlId) {
        self.clicks.push(id);
    }

    /// Drain the controls activated since the last call, oldest first.
    pub fn take_clicks(&mut self) -> Vec<ControlId> {
        std::mem::take(&mut self.clicks)
    }

    /// Like [`take_clicks`](Self::take_clicks) but resolved to control names.
    pub fn take_clicked_names(&mut self) -> Vec<String> {
        let clicks = self.take_clicks();
        clicks
            .into_iter()
            .filter_map(|id| self.control(id).map(|c| c.name.clone()))
            .collect()
    }

    /// Remove every control and forget hover, focus, and pending clicks.
    pub fn clear(&mut self) {
        self.controls.clear();
        self.hovered = None;
        self.focused = None;
        self.pressed = None;
        self.clicks.clear();
    }
}
