//! Visual settings shared by every control on a canvas.

use raylib::prelude::Color;
use std::path::PathBuf;

use crate::resources::gameconfig::GameConfig;

/// Key under which the skin image is stored in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore).
pub const SKIN_TEXTURE_KEY: &str = "gui_skin";

/// Font name that selects raylib's built-in font.
pub const BUILTIN_FONT_NAME: &str = "default";

#[derive(Debug, Clone)]
pub struct GuiSkin {
    /// Image stretched over button faces when it could be loaded.
    pub image_path: PathBuf,
    pub font_name: String,
    pub font_size: i32,
    pub text_color: Color,
    pub background: Color,
    pub face: Color,
    pub face_hovered: Color,
    pub face_pressed: Color,
    pub face_disabled: Color,
    pub focus_outline: Color,
}

impl GuiSkin {
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            font_name: BUILTIN_FONT_NAME.to_string(),
            font_size: 20,
            text_color: Color::BLACK,
            background: Color::RAYWHITE,
            face: Color::LIGHTGRAY,
            face_hovered: Color::SKYBLUE,
            face_pressed: Color::GRAY,
            face_disabled: Color::DARKGRAY,
            focus_outline: Color::ORANGE,
        }
    }

    /// Skin described by the `[gui]` section of the configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut skin = Self::new(config.gui_skin_image.clone());
        skin.set_default_font(&config.gui_font_name, config.gui_font_size as i32);
        skin
    }

    pub fn set_default_font(&mut self, name: &str, size: i32) {
        self.font_name = name.to_string();
        self.font_size = size.max(1);
    }

    /// Key of the font to look up in the
    /// [`FontStore`](crate::resources::fontstore::FontStore), or `None` for
    /// raylib's built-in font.
    pub fn font_key(&self) -> Option<&str> {
        match self.font_name.as_str() {
            "" | BUILTIN_FONT_NAME => None,
            name => Some(name),
        }
    }
}

impl Default for GuiSkin {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_gui_section() {
        let mut config = GameConfig::new();
        config.gui_font_name = "mono".to_string();
        config.gui_font_size = 12;
        let skin = GuiSkin::from_config(&config);
        assert_eq!(skin.font_name, "mono");
        assert_eq!(skin.font_size, 12);
        assert_eq!(skin.image_path, config.gui_skin_image);
    }

    #[test]
    fn test_font_key_skips_builtin_font() {
        let mut skin = GuiSkin::default();
        assert_eq!(skin.font_key(), None);
        skin.set_default_font("", 20);
        assert_eq!(skin.font_key(), None);
        skin.set_default_font("mono", 20);
        assert_eq!(skin.font_key(), Some("mono"));
    }

    #[test]
    fn test_font_size_never_zero() {
        let mut skin = GuiSkin::default();
        skin.set_default_font("x", 0);
        assert_eq!(skin.font_size, 1);
    }
}
