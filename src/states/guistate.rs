//! Game state backed by a GUI canvas.
//!
//! A [`GuiState`] owns exactly one [`GuiCanvas`] and one [`GuiInput`] for
//! its whole lifetime. What goes on the canvas and what happens when a
//! button is clicked is decided by a [`GuiLayout`]. Each state clears only
//! its own canvas when it leaves, so states stacked below keep their GUI.

use bevy_ecs::prelude::World;
use log::debug;

use crate::events::input::InputEvent;
use crate::gui::canvas::GuiCanvas;
use crate::gui::input::GuiInput;
use crate::gui::skin::GuiSkin;
use crate::states::stack::{GameState, StateTransition};

/// Content and behavior of a [`GuiState`].
pub trait GuiLayout {
    fn name(&self) -> &str;

    /// Populate an empty canvas.
    fn load_gui(&mut self, canvas: &mut GuiCanvas);

    fn on_enter(&mut self, _world: &mut World, _canvas: &mut GuiCanvas) {}

    fn on_leave(&mut self, _world: &mut World) {}

    /// Per-frame logic, typically draining [`GuiCanvas::take_clicked_names`].
    fn update(&mut self, _world: &mut World, _canvas: &mut GuiCanvas, _dt: f32) -> StateTransition {
        StateTransition::None
    }

    /// Events the GUI did not consume. Returns `true` if the layout used it.
    fn on_unhandled_input(&mut self, _world: &mut World, _event: &InputEvent) -> bool {
        false
    }
}

pub struct GuiState<L: GuiLayout> {
    layout: L,
    canvas: GuiCanvas,
    input: GuiInput,
}

impl<L: GuiLayout> GuiState<L> {
    /// Build the canvas at screen size and load the layout into it.
    ///
    /// The canvas is transparent and accepts keyboard input.
    pub fn new(mut layout: L, width: i32, height: i32, skin: GuiSkin) -> Self {
        let mut canvas = GuiCanvas::new(skin, width, height);
        canvas.draw_background = false;
        canvas.keyboard_input_enabled = true;
        layout.load_gui(&mut canvas);
        Self {
            layout,
            canvas,
            input: GuiInput::new(),
        }
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn canvas_mut(&mut self) -> &mut GuiCanvas {
        &mut self.canvas
    }

    pub fn gui_input(&self) -> &GuiInput {
        &self.input
    }
}

impl<L: GuiLayout> GameState for GuiState<L> {
    fn name(&self) -> &str {
        self.layout.name()
    }

    fn enter(&mut self, world: &mut World) {
        self.canvas.clear();
        self.input.reset();
        self.layout.load_gui(&mut self.canvas);
        debug!(
            "GuiState '{}': loaded {} controls",
            self.layout.name(),
            self.canvas.len()
        );
        self.layout.on_enter(world, &mut self.canvas);
    }

    fn leave(&mut self, world: &mut World) {
        self.layout.on_leave(world);
        self.canvas.clear();
        self.input.reset();
    }

    fn update(&mut self, world: &mut World, dt: f32) -> StateTransition {
        self.layout.update(world, &mut self.canvas, dt)
    }

    fn handle_input(&mut self, world: &mut World, event: &InputEvent) -> bool {
        if self.input.process(&mut self.canvas, event) {
            return true;
        }
        self.layout.on_unhandled_input(world, event)
    }

    fn canvas(&self) -> Option<&GuiCanvas> {
        Some(&self.canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::stack::StateStack;
    use raylib::prelude::{KeyboardKey, MouseButton, Rectangle};

    #[derive(Default)]
    struct Menu {
        loads: usize,
        clicked: Vec<String>,
        unhandled: usize,
    }

    impl GuiLayout for Menu {
        fn name(&self) -> &str {
            "menu"
        }
        fn load_gui(&mut self, canvas: &mut GuiCanvas) {
            self.loads += 1;
            canvas.add_label(
                "title",
                "Menu",
                Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: 200.0,
                    height: 20.0,
                },
            );
            canvas.add_button(
                "ok",
                "OK",
                Rectangle {
                    x: 10.0,
                    y: 40.0,
                    width: 80.0,
                    height: 20.0,
                },
            );
        }
        fn update(&mut self, _world: &mut World, canvas: &mut GuiCanvas, _dt: f32) -> StateTransition {
            self.clicked.extend(canvas.take_clicked_names());
            StateTransition::None
        }
        fn on_unhandled_input(&mut self, _world: &mut World, _event: &InputEvent) -> bool {
            self.unhandled += 1;
            false
        }
    }

    fn click(state: &mut GuiState<Menu>, world: &mut World, x: f32, y: f32) {
        let button = MouseButton::MOUSE_BUTTON_LEFT;
        state.handle_input(world, &InputEvent::MouseButtonPressed { button, x, y });
        state.handle_input(world, &InputEvent::MouseButtonReleased { button, x, y });
    }

    #[test]
    fn test_new_loads_layout_with_keyboard_and_no_background() {
        let state = GuiState::new(Menu::default(), 320, 200, GuiSkin::default());
        let canvas = state.canvas().unwrap();
        assert_eq!(canvas.len(), 2);
        assert!(canvas.keyboard_input_enabled);
        assert!(!canvas.draw_background);
        assert_eq!(state.layout().loads, 1);
    }

    #[test]
    fn test_reenter_rebuilds_from_scratch() {
        let mut world = World::new();
        let mut state = GuiState::new(Menu::default(), 320, 200, GuiSkin::default());
        state.enter(&mut world);
        state.leave(&mut world);
        assert!(state.canvas().unwrap().is_empty());
        state.enter(&mut world);
        assert_eq!(state.canvas().unwrap().len(), 2);
        assert_eq!(state.layout().loads, 3);
    }

    #[test]
    fn test_button_click_reaches_layout_update() {
        let mut world = World::new();
        let mut state = GuiState::new(Menu::default(), 320, 200, GuiSkin::default());
        state.enter(&mut world);
        click(&mut state, &mut world, 20.0, 50.0);
        state.update(&mut world, 0.016);
        assert_eq!(state.layout().clicked, vec!["ok".to_string()]);
    }

    #[test]
    fn test_unhandled_events_go_to_layout() {
        let mut world = World::new();
        let mut state = GuiState::new(Menu::default(), 320, 200, GuiSkin::default());
        state.enter(&mut world);
        // nothing focused, so keys fall through
        let handled = state.handle_input(&mut world, &InputEvent::KeyPressed(KeyboardKey::KEY_P));
        assert!(!handled);
        assert_eq!(state.layout().unhandled, 1);
    }

    #[test]
    fn test_leave_clears_only_own_canvas() {
        let mut world = World::new();
        let mut stack = StateStack::new();
        stack.push(
            Box::new(GuiState::new(Menu::default(), 320, 200, GuiSkin::default())),
            &mut world,
        );
        stack.push(
            Box::new(GuiState::new(Menu::default(), 320, 200, GuiSkin::default())),
            &mut world,
        );
        stack.pop(&mut world);
        let below = stack.top().and_then(|s| s.canvas()).unwrap();
        assert_eq!(below.len(), 2);
    }
}
