//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance animated sprites and report finished one-shots
//! - [`input`] – read hardware input and emit [`crate::events::input::InputEvent`] messages
//! - [`render`] – draw sprites and the top state's GUI using Raylib
//! - [`statestack`] – feed input to and update the game state stack
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod input;
pub mod render;
pub mod statestack;
pub mod time;
