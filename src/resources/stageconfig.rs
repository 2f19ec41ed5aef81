//! Stage configuration resource.
//!
//! Manages runtime settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 240
//! height = 160
//!
//! [collision]
//! capacity = 1024
//!
//! [assets]
//! dir = ./assets
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 240;
const DEFAULT_SCREEN_HEIGHT: u32 = 160;
const DEFAULT_COLLISION_CAPACITY: usize = 1024;
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Stage configuration resource.
///
/// Stores the logical screen size, the collision record pool capacity, and
/// the assets directory. Missing file or keys fall back to defaults.
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Logical screen width in pixels.
    pub screen_width: u32,
    /// Logical screen height in pixels.
    pub screen_height: u32,
    /// Number of preallocated collision records per frame.
    pub collision_capacity: usize,
    /// Directory holding the image manifest.
    pub assets_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StageConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            collision_capacity: DEFAULT_COLLISION_CAPACITY,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
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

        // [screen] section
        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }

        // [collision] section
        if let Some(capacity) = config.getuint("collision", "capacity").ok().flatten() {
            self.collision_capacity = capacity as usize;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }

        info!(
            "Loaded config: {}x{} screen, {} collision records, assets in {:?}",
            self.screen_width, self.screen_height, self.collision_capacity, self.assets_dir
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("screen", "width", Some(self.screen_width.to_string()));
        config.set("screen", "height", Some(self.screen_height.to_string()));
        config.set(
            "collision",
            "capacity",
            Some(self.collision_capacity.to_string()),
        );
        config.set(
            "assets",
            "dir",
            Some(self.assets_dir.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the logical screen size.
    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StageConfig::new();
        assert_eq!(config.screen_size(), (240, 160));
        assert_eq!(config.collision_capacity, 1024);
        assert_eq!(config.assets_dir, PathBuf::from("./assets"));
    }

    #[test]
    fn test_with_path_keeps_defaults() {
        let config = StageConfig::with_path("./custom.ini");
        assert_eq!(config.config_path, PathBuf::from("./custom.ini"));
        assert_eq!(config.screen_width, 240);
    }
}
