//! Retained-mode GUI used by [`GuiState`](crate::states::guistate::GuiState).
//!
//! - [`canvas`] – root container holding the controls of one state
//! - [`control`] – labels, buttons and text boxes
//! - [`draw`] – raylib rendering of a canvas
//! - [`input`] – adapter turning raw input into canvas changes
//! - [`skin`] – colors, font and image shared by a canvas

pub mod canvas;
pub mod control;
pub mod draw;
pub mod input;
pub mod skin;
