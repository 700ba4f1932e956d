//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/picview/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Thumbnail grid settings
    pub grid: GridConfig,
    /// Popup settings
    pub popup: PopupConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
        }
    }
}

/// Thumbnail grid settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Thumbnail bounding box width, in pixels
    pub thumb_width: u32,
    /// Thumbnail bounding box height, in pixels
    pub thumb_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            thumb_width: 80,
            thumb_height: 60,
        }
    }
}

/// Popup settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Popup bounding box width, in pixels
    pub width: u32,
    /// Popup bounding box height, in pixels
    pub height: u32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: 280,
            height: 280,
        }
    }
}

impl ConfigFile {
    /// Load the config file, falling back to defaults if it is missing
    /// or malformed
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Path to the config file: `~/.config/picview/config.toml`
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("picview").join("config.toml"))
    }
}
