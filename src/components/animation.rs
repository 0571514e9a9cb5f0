//! Frame-sequence animation data.
//!
//! An [`Animation`] is an ordered list of source rectangles on a sprite sheet
//! plus a single per-frame duration and an [`AnimKind`] that decides what
//! happens after the last frame. It is owned by an
//! [`AnimatedSprite`](crate::components::animatedsprite::AnimatedSprite),
//! which drives it through [`Animation::next_frame`].

use raylib::prelude::Rectangle;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default per-frame duration in milliseconds for freshly created animations.
pub const DEFAULT_FRAME_DURATION_MS: f32 = 100.0;

/// Playback mode applied when the frame cursor runs past the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimKind {
    /// Wrap around to the first frame.
    #[default]
    Loop,
    /// Stay on the last frame and report the animation as finished.
    Once,
    /// Bounce back and forth between the first and the last frame.
    #[serde(alias = "ping_pong")]
    PingPong,
}

/// Named, ordered sequence of frame rectangles.
#[derive(Debug, Clone)]
pub struct Animation {
    name: String,
    kind: AnimKind,
    frames: SmallVec<[Rectangle; 8]>,
    frame_duration_ms: f32,
    cursor: usize,
    forward: bool,
    finished: bool,
}

impl Animation {
    pub fn new(name: impl Into<String>, kind: AnimKind) -> Self {
        Self {
            name: name.into(),
            kind,
            frames: SmallVec::new(),
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            cursor: 0,
            forward: true,
            finished: false,
        }
    }

    pub fn with_frame_duration(mut self, millis: f32) -> Self {
        self.set_frame_duration(millis);
        self
    }

    /// Set the duration every frame of this animation stays on screen.
    ///
    /// Negative and non-finite values are clamped to zero, which advances
    /// one frame on every update.
    pub fn set_frame_duration(&mut self, millis: f32) -> &mut Self {
        self.frame_duration_ms = if millis.is_finite() { millis.max(0.0) } else { 0.0 };
        self
    }

    pub fn add_frame(&mut self, frame: Rectangle) -> &mut Self {
        self.frames.push(frame);
        self
    }

    /// Append `count` frames laid out left to right on a sprite sheet,
    /// starting at (`x`, `y`), each `width` x `height` pixels.
    pub fn add_strip(&mut self, x: f32, y: f32, width: f32, height: f32, count: usize) -> &mut Self {
        for i in 0..count {
            self.frames.push(Rectangle {
                x: x + i as f32 * width,
                y,
                width,
                height,
            });
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AnimKind {
        self.kind
    }

    pub fn frame_duration_ms(&self) -> f32 {
        self.frame_duration_ms
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Rectangle] {
        &self.frames
    }

    /// Index of the frame currently selected by the cursor.
    pub fn frame_index(&self) -> usize {
        self.cursor
    }

    pub fn current_frame(&self) -> Option<Rectangle> {
        self.frames.get(self.cursor).copied()
    }

    /// A `Once` animation that has reached its last frame.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Rewind to the first frame.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.forward = true;
        self.finished = false;
    }

    /// Advance the cursor according to [`AnimKind`] and return the new frame.
    ///
    /// Returns `None` when the animation has no frames.
    pub fn next_frame(&mut self) -> Option<Rectangle> {
        let count = self.frames.len();
        if count == 0 {
            return None;
        }
        let last = count - 1;

        match self.kind {
            AnimKind::Loop => {
                self.cursor = if self.cursor >= last { 0 } else { self.cursor + 1 };
            }
            AnimKind::Once => {
                if self.cursor < last {
                    self.cursor += 1;
                }
                if self.cursor == last {
                    self.finished = true;
                }
            }
            AnimKind::PingPong => {
                if count > 1 {
                    if self.forward {
                        if self.cursor < last {
                            self.cursor += 1;
                        } else {
                            self.forward = false;
                            self.cursor -= 1;
                        }
                    } else if self.cursor > 0 {
                        self.cursor -= 1;
                    } else {
                        self.forward = true;
                        self.cursor += 1;
                    }
                }
            }
        }

        self.current_frame()
    }
}
