//! Lantern Engine library.
//!
//! This module exposes the engine's ECS components, resources, systems,
//! events, GUI, and game states for use in integration tests and as a
//! reusable library.

pub mod components;
pub mod events;
pub mod game;
pub mod gui;
pub mod resources;
pub mod states;
pub mod systems;
