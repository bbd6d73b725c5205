//! Settings loader plus strongly typed configuration structures.
//!
//! The UI layer only needs a handful of settings: where the layout document
//! lives and whether the debug menu starts enabled. They come from
//! `settings.toml` in the profile directory, with defaults for anything
//! missing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// UI-facing application settings, deserialized from settings.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the declarative UI layout document (JSON).
    #[serde(default = "default_ui_layout_file")]
    pub ui_layout_file: PathBuf,
    /// Whether the debug menu (FPS counter) starts enabled.
    #[serde(default)]
    pub show_debug_menu: bool,
}

fn default_ui_layout_file() -> PathBuf {
    PathBuf::from("defaults/ui_layout.json")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_layout_file: default_ui_layout_file(),
            show_debug_menu: false,
        }
    }
}

impl Settings {
    /// Get the profile directory.
    /// Can be overridden with the TILOPOLIS_DIR environment variable.
    pub fn profile_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("TILOPOLIS_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        // Default to ~/.tilopolis
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".tilopolis"))
    }

    /// Path to settings.toml inside the profile directory.
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::profile_dir()?.join("settings.toml"))
    }

    /// Load settings from the profile directory, falling back to defaults
    /// when no settings file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path).context("Failed to read settings.toml")?;
            let settings: Settings =
                toml::from_str(&contents).context("Failed to parse settings.toml")?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings back to the profile directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create profile directory")?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(&path, contents).context("Failed to write settings.toml")?;
        Ok(())
    }
}
