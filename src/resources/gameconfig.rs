//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [gui]
//! skin_image = ./assets/gui/skin.png
//! font_name = default
//! font_path = ./assets/fonts/gui.ttf
//! font_size = 20
//!
//! [assets]
//! animations = ./assets/animations.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_GUI_SKIN_IMAGE: &str = "./assets/gui/skin.png";
const DEFAULT_GUI_FONT_NAME: &str = "default";
const DEFAULT_GUI_FONT_PATH: &str = "./assets/fonts/gui.ttf";
const DEFAULT_GUI_FONT_SIZE: u32 = 20;
const DEFAULT_ANIMATIONS_PATH: &str = "./assets/animations.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Image used by the GUI skin.
    pub gui_skin_image: PathBuf,
    /// Default GUI font, as a key into the font store. `default` is raylib's
    /// built-in font.
    pub gui_font_name: String,
    /// File loaded under `gui_font_name`.
    pub gui_font_path: PathBuf,
    /// Default GUI font size in pixels.
    pub gui_font_size: u32,
    /// JSON file with animation definitions.
    pub animations_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            gui_skin_image: PathBuf::from(DEFAULT_GUI_SKIN_IMAGE),
            gui_font_name: DEFAULT_GUI_FONT_NAME.to_string(),
            gui_font_path: PathBuf::from(DEFAULT_GUI_FONT_PATH),
            gui_font_size: DEFAULT_GUI_FONT_SIZE,
            animations_path: PathBuf::from(DEFAULT_ANIMATIONS_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [gui] section
        if let Some(image) = config.get("gui", "skin_image") {
            self.gui_skin_image = PathBuf::from(image);
        }
        if let Some(font) = config.get("gui", "font_name") {
            self.gui_font_name = font;
        }
        if let Some(path) = config.get("gui", "font_path") {
            self.gui_font_path = PathBuf::from(path);
        }
        if let Some(size) = config.getuint("gui", "font_size").ok().flatten() {
            self.gui_font_size = size as u32;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "animations") {
            self.animations_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, gui font {} {}px, animations {:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.gui_font_name,
            self.gui_font_size,
            self.animations_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [gui] section
        config.set(
            "gui",
            "skin_image",
            Some(self.gui_skin_image.display().to_string()),
        );
        config.set("gui", "font_name", Some(self.gui_font_name.clone()));
        config.set(
            "gui",
            "font_path",
            Some(self.gui_font_path.display().to_string()),
        );
        config.set("gui", "font_size", Some(self.gui_font_size.to_string()));

        // [assets] section
        config.set(
            "assets",
            "animations",
            Some(self.animations_path.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set window size.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "lanternengine_{}_{}.ini",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 120);
        assert_eq!(config.gui_font_size, 20);
        assert_eq!(config.gui_font_name, "default");
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let mut config = GameConfig::with_path(&path);
        config.set_window_size(800, 600);
        config.gui_font_name = "mono".to_string();
        config.gui_font_size = 14;
        config.gui_font_path = PathBuf::from("fonts/mono.ttf");
        config.animations_path = PathBuf::from("anims.json");
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.window_size(), (800, 600));
        assert_eq!(loaded.gui_font_name, "mono");
        assert_eq!(loaded.gui_font_size, 14);
        assert_eq!(loaded.gui_font_path, PathBuf::from("fonts/mono.ttf"));
        assert_eq!(loaded.animations_path, PathBuf::from("anims.json"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_config_path("partial");
        std::fs::write(&path, "[gui]\nfont_size = 32\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.gui_font_size, 32);
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.gui_font_name, "default");
    }
}
