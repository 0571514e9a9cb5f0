use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Sprite is identified by a texture key, its size in world units and an offset if the texture is a spritesheet.
/// The offset is used to select the correct frame from the spritesheet.
/// The origin selects the pivot point (in pixels) relative to the frame's top-left
/// used for placement/rotation/scaling when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
            origin: Vector2 { x: 0.0, y: 0.0 },
            flip_h: false,
            flip_v: false,
        }
    }

    /// Pivot at the center of the frame.
    pub fn centered(mut self) -> Self {
        self.origin = Vector2 {
            x: self.width * 0.5,
            y: self.height * 0.5,
        };
        self
    }

    /// Region of the texture currently shown.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: self.offset.x,
            y: self.offset.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Show `rect` from the texture. Frames of a different size resize the sprite.
    pub fn set_source_rect(&mut self, rect: Rectangle) {
        self.offset = Vector2 {
            x: rect.x,
            y: rect.y,
        };
        self.width = rect.width;
        self.height = rect.height;
    }
}
