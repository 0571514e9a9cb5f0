//! Event types used by the engine.
//!
//! Submodules:
//! - [`animation`] – notifications emitted by the animation system
//! - [`input`] – raw input events forwarded to game states
pub mod animation;
pub mod input;
