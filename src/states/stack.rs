//! Game state stack.
//!
//! Only the topmost [`GameState`] receives updates and input. Pushing a
//! state calls its [`GameState::enter`]; popping calls [`GameState::leave`].
//! States covered by a push are left in place untouched and get no callbacks
//! until they are on top again, except a fresh `enter` when they are pushed
//! anew.
//!
//! The stack lives in the ECS world as a non-send resource. Systems that
//! drive it take it out of the world first so states can receive
//! `&mut World` (see [`crate::systems::statestack`]).

use bevy_ecs::prelude::World;
use log::{debug, info, warn};

use crate::events::input::InputEvent;
use crate::gui::canvas::GuiCanvas;

/// What the top state wants the stack to do after an update.
pub enum StateTransition {
    None,
    /// Put a new state on top of the current one.
    Push(Box<dyn GameState>),
    /// Remove the current state.
    Pop,
    /// Remove the current state and put a new one in its place.
    Replace(Box<dyn GameState>),
    /// Leave every state and stop the game.
    Quit,
}

impl std::fmt::Debug for StateTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateTransition::None => write!(f, "None"),
            StateTransition::Push(s) => write!(f, "Push({})", s.name()),
            StateTransition::Pop => write!(f, "Pop"),
            StateTransition::Replace(s) => write!(f, "Replace({})", s.name()),
            StateTransition::Quit => write!(f, "Quit"),
        }
    }
}

/// One scene of the game: title screen, gameplay, pause menu...
pub trait GameState {
    fn name(&self) -> &str;

    /// Called when the state is pushed on the stack.
    fn enter(&mut self, _world: &mut World) {}

    /// Called when the state is removed from the stack.
    fn leave(&mut self, _world: &mut World) {}

    /// Called once per frame while the state is on top. `dt` is in seconds.
    fn update(&mut self, _world: &mut World, _dt: f32) -> StateTransition {
        StateTransition::None
    }

    /// Offer a raw input event. Returns `true` if the state consumed it.
    fn handle_input(&mut self, _world: &mut World, _event: &InputEvent) -> bool {
        false
    }

    /// GUI to draw on top of the world, if the state has one.
    fn canvas(&self) -> Option<&GuiCanvas> {
        None
    }
}

#[derive(Default)]
pub struct StateStack {
    states: Vec<Box<dyn GameState>>,
    quit_requested: bool,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn top(&self) -> Option<&dyn GameState> {
        self.states.last().map(|s| s.as_ref())
    }

    pub fn top_mut(&mut self) -> Option<&mut (dyn GameState + 'static)> {
        self.states.last_mut().map(|s| s.as_mut())
    }

    /// Names from bottom to top.
    pub fn names(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.name()).collect()
    }

    /// True once [`StateTransition::Quit`] was applied or the last state was popped.
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn push(&mut self, mut state: Box<dyn GameState>, world: &mut World) {
        info!("Entering state '{}'", state.name());
        state.enter(world);
        self.states.push(state);
    }

    pub fn pop(&mut self, world: &mut World) -> Option<Box<dyn GameState>> {
        let Some(mut state) = self.states.pop() else {
            warn!("Tried to pop state, but state stack is empty!");
            return None;
        };
        info!("Leaving state '{}'", state.name());
        state.leave(world);
        Some(state)
    }

    pub fn replace(&mut self, state: Box<dyn GameState>, world: &mut World) -> Option<Box<dyn GameState>> {
        let old = self.pop(world);
        self.push(state, world);
        old
    }

    /// Leave every state, top first.
    pub fn clear(&mut self, world: &mut World) {
        while self.pop(world).is_some() {}
    }

    /// Give `event` to the top state. Returns `true` if it was consumed.
    pub fn handle_input(&mut self, world: &mut World, event: &InputEvent) -> bool {
        match self.states.last_mut() {
            Some(state) => state.handle_input(world, event),
            None => false,
        }
    }

    /// Update the top state and apply the transition it asks for.
    pub fn update(&mut self, world: &mut World, dt: f32) {
        let transition = match self.states.last_mut() {
            Some(state) => state.update(world, dt),
            None => return,
        };
        self.apply(transition, world);
    }

    pub fn apply(&mut self, transition: StateTransition, world: &mut World) {
        if !matches!(transition, StateTransition::None) {
            debug!("Applying state transition {:?}", transition);
        }
        match transition {
            StateTransition::None => {}
            StateTransition::Push(state) => self.push(state, world),
            StateTransition::Pop => {
                self.pop(world);
                if self.states.is_empty() {
                    self.quit_requested = true;
                }
            }
            StateTransition::Replace(state) => {
                self.replace(state, world);
            }
            StateTransition::Quit => {
                self.clear(world);
                self.quit_requested = true;
            }
        }
    }
}
