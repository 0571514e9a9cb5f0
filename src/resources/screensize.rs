//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. GUI canvases are
//! sized from it when a state is created.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
