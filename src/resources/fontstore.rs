//! Font store resource.
//!
//! A non-send resource that stores loaded fonts keyed by string IDs.
//! Fonts are loaded at startup and referenced by key from
//! [`GuiSkin::font_name`](crate::gui::skin::GuiSkin::font_name).
//!
//! Note: This is a non-send resource because Raylib fonts must be accessed
//! from the main thread only.

use raylib::prelude::Font;
use rustc_hash::FxHashMap;

/// Map of font keys to loaded fonts.
///
/// Insert with `insert_non_send_resource`; read with `get_non_send_resource`.
#[derive(Default)]
pub struct FontStore {
    fonts: FxHashMap<String, Font>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font with the given key, replacing any previous one.
    pub fn add(&mut self, id: impl Into<String>, font: Font) {
        self.fonts.insert(id.into(), font);
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Font> {
        self.fonts.get(id.as_ref())
    }

    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.fonts.contains_key(id.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_finds_nothing() {
        let fonts = FontStore::new();
        assert!(fonts.is_empty());
        assert!(fonts.get("gui").is_none());
        assert!(!fonts.contains("gui"));
    }
}
