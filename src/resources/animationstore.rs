//! Animation resource registry.
//!
//! Stores reusable animation definitions that several entities can share.
//! Definitions are plain data, usually loaded from a JSON file:
//!
//! ```json
//! {
//!   "walk": { "kind": "loop", "frame_duration_ms": 100,
//!             "strip": { "x": 0, "y": 0, "width": 32, "height": 32, "count": 4 } },
//!   "hurt": { "kind": "once", "frame_duration_ms": 80,
//!             "frames": [ { "x": 0, "y": 32, "width": 32, "height": 32 } ] }
//! }
//! ```
//!
//! [`AnimationStore::install`] turns a definition into an owned
//! [`Animation`] inside an [`AnimatedSprite`].

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use raylib::prelude::Rectangle;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::animation::{AnimKind, Animation, DEFAULT_FRAME_DURATION_MS};

/// A single frame region on a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<FrameDef> for Rectangle {
    fn from(f: FrameDef) -> Self {
        Rectangle {
            x: f.x,
            y: f.y,
            width: f.width,
            height: f.height,
        }
    }
}

/// `count` equally sized frames laid out left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub count: usize,
}

fn default_frame_duration() -> f32 {
    DEFAULT_FRAME_DURATION_MS
}

/// Immutable description of one animation.
///
/// Explicit `frames` come first, followed by the frames of `strip` if both
/// are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDef {
    #[serde(default)]
    pub kind: AnimKind,
    #[serde(default = "default_frame_duration")]
    pub frame_duration_ms: f32,
    #[serde(default)]
    pub frames: Vec<FrameDef>,
    #[serde(default)]
    pub strip: Option<StripDef>,
}

impl AnimationDef {
    pub fn frame_count(&self) -> usize {
        self.frames.len() + self.strip.map_or(0, |s| s.count)
    }

    /// Build an owned animation named `name` from this definition.
    pub fn build(&self, name: &str) -> Animation {
        let mut anim = Animation::new(name, self.kind).with_frame_duration(self.frame_duration_ms);
        for frame in &self.frames {
            anim.add_frame((*frame).into());
        }
        if let Some(s) = self.strip {
            anim.add_strip(s.x, s.y, s.width, s.height, s.count);
        }
        anim
    }
}

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationDef>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads animation definitions from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&file_content)?;
        info!("Loaded {} animations from {}", store.animations.len(), path);
        Ok(store)
    }

    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let animations: FxHashMap<String, AnimationDef> = serde_json::from_str(json)?;
        for (name, def) in &animations {
            if def.frame_count() == 0 {
                warn!("Animation '{}' has no frames", name);
            }
        }
        Ok(Self { animations })
    }

    pub fn insert(&mut self, name: impl Into<String>, def: AnimationDef) {
        self.animations.insert(name.into(), def);
    }

    pub fn get(&self, name: &str) -> Option<&AnimationDef> {
        self.animations.get(name)
    }

    /// Sorted list of known animation names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Add the definition called `name` to `sprite`.
    ///
    /// Returns `false` and leaves the sprite untouched if `name` is unknown.
    pub fn install(&self, sprite: &mut AnimatedSprite, name: &str) -> bool {
        match self.animations.get(name) {
            Some(def) => {
                sprite.insert(def.build(name));
                true
            }
            None => {
                warn!("AnimationStore: no animation named '{}'", name);
                false
            }
        }
    }

    /// Build a stopped sprite holding the listed animations.
    pub fn build_sprite(&self, names: &[&str]) -> AnimatedSprite {
        let mut sprite = AnimatedSprite::new();
        for name in names {
            self.install(&mut sprite, name);
        }
        sprite
    }
}
