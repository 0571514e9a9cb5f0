//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – frame-sequence animation data and playback kinds
//! - [`animatedsprite`] – named animations plus the play/pause/stop state machine
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animatedsprite;
pub mod animation;
pub mod mapposition;
pub mod sprite;
pub mod zindex;
