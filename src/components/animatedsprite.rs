//! Animated sprite component.
//!
//! [`AnimatedSprite`] owns a set of [`Animation`]s keyed by name and a
//! [`Playback`] state that selects which one drives the visible frame. Call
//! [`AnimatedSprite::update`] once per tick with the elapsed milliseconds;
//! the [`animated_sprite_system`](crate::systems::animation::animated_sprite_system)
//! does that for every entity and mirrors the result into its
//! [`Sprite`](crate::components::sprite::Sprite).
//!
//! # Timing
//!
//! Time accumulates until it reaches the current animation's frame duration.
//! Then the accumulator is reset to zero and exactly one frame is advanced,
//! no matter how many durations elapsed. Low update rates therefore slow the
//! animation down instead of skipping frames.

use bevy_ecs::prelude::Component;
use log::{debug, warn};
use std::collections::hash_map::Entry;
use raylib::prelude::Rectangle;
use rustc_hash::FxHashMap;

use crate::components::animation::{AnimKind, Animation};

/// Which animation, if any, is selected and whether it is advancing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

impl Playback {
    /// Name of the selected animation, playing or paused.
    pub fn current(&self) -> Option<&str> {
        match self {
            Playback::Stopped => None,
            Playback::Playing(name) | Playback::Paused(name) => Some(name),
        }
    }
}

/// Result of a single [`AnimatedSprite::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Stopped or paused; nothing happened.
    Idle,
    /// Time was accumulated but the frame did not change.
    Waiting,
    /// Moved to the next frame.
    Advanced,
    /// Moved onto the last frame of a [`AnimKind::Once`] animation.
    Finished,
}

#[derive(Component, Debug, Clone)]
pub struct AnimatedSprite {
    animations: FxHashMap<String, Animation>,
    playback: Playback,
    elapsed_ms: f32,
    /// Frame left on screen when no animation is selected.
    held_rect: Rectangle,
}

impl Default for AnimatedSprite {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimatedSprite {
    pub fn new() -> Self {
        Self {
            animations: FxHashMap::default(),
            playback: Playback::Stopped,
            elapsed_ms: 0.0,
            held_rect: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
        }
    }

    /// Create and store a new animation, returning it for frame setup.
    ///
    /// Adding a name that already exists replaces the old animation. The
    /// playback state is left as is, so a sprite playing `name` continues on
    /// the new frames from the first one.
    pub fn add(&mut self, name: impl Into<String>, kind: AnimKind) -> &mut Animation {
        let name = name.into();
        if self.animations.contains_key(&name) {
            warn!("AnimatedSprite: replacing existing animation '{}'", name);
        }
        self.insert(Animation::new(name, kind))
    }

    /// Store an already built animation under its own name.
    ///
    /// Replacing the selected animation restarts its frame timer.
    pub fn insert(&mut self, animation: Animation) -> &mut Animation {
        if self.playback.current() == Some(animation.name()) {
            self.elapsed_ms = 0.0;
        }
        match self.animations.entry(animation.name().to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(animation);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(animation),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Animation> {
        self.animations.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Start playing `name` from its first frame.
    ///
    /// Playing the animation that is already selected does nothing, so this
    /// can be called every frame. An unknown name stops playback.
    pub fn play(&mut self, name: &str) {
        let resolved = self.animations.contains_key(name);
        let target = resolved.then_some(name);
        if self.playback.current() == target {
            return;
        }

        if !resolved {
            warn!("AnimatedSprite: unknown animation '{}', stopping", name);
            self.stop();
            return;
        }
        self.elapsed_ms = 0.0;
        if let Some(anim) = self.animations.get_mut(name) {
            debug!("AnimatedSprite: play '{}'", name);
            anim.reset();
        }
        self.playback = Playback::Playing(name.to_string());
    }

    pub fn pause(&mut self) {
        self.playback = match std::mem::take(&mut self.playback) {
            Playback::Playing(name) => Playback::Paused(name),
            other => other,
        };
    }

    pub fn resume(&mut self) {
        self.playback = match std::mem::take(&mut self.playback) {
            Playback::Paused(name) => Playback::Playing(name),
            other => other,
        };
    }

    /// Deselect the current animation. The visible frame stays where it was.
    pub fn stop(&mut self) {
        self.held_rect = self.source_rect();
        self.playback = Playback::Stopped;
        self.elapsed_ms = 0.0;
    }

    /// Advance playback by `elapsed_ms` milliseconds.
    pub fn update(&mut self, elapsed_ms: f32) -> UpdateOutcome {
        let Playback::Playing(name) = &self.playback else {
            return UpdateOutcome::Idle;
        };
        let Some(anim) = self.animations.get_mut(name) else {
            return UpdateOutcome::Idle;
        };
        if !elapsed_ms.is_finite() || elapsed_ms < 0.0 {
            return UpdateOutcome::Waiting;
        }

        self.elapsed_ms += elapsed_ms;
        if self.elapsed_ms < anim.frame_duration_ms() {
            return UpdateOutcome::Waiting;
        }

        self.elapsed_ms = 0.0;
        // A finished one-shot holds its last frame
        if anim.is_finished() {
            return UpdateOutcome::Waiting;
        }
        if anim.next_frame().is_none() {
            return UpdateOutcome::Waiting;
        }

        if anim.is_finished() {
            UpdateOutcome::Finished
        } else {
            UpdateOutcome::Advanced
        }
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.playback, Playback::Playing(_))
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.playback, Playback::Paused(_))
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.playback, Playback::Stopped)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.playback.current()
    }

    pub fn current(&self) -> Option<&Animation> {
        self.playback
            .current()
            .and_then(|name| self.animations.get(name))
    }

    /// Milliseconds accumulated since the last frame change.
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Sprite-sheet region that should be drawn right now.
    ///
    /// The frame under the selected animation's cursor, or the last frame
    /// shown before playback stopped.
    pub fn source_rect(&self) -> Rectangle {
        self.current()
            .and_then(Animation::current_frame)
            .unwrap_or(self.held_rect)
    }

    /// Frame index of the selected animation, if any.
    pub fn frame_index(&self) -> Option<usize> {
        self.current().map(Animation::frame_index)
    }
}
