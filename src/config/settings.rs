//! Application configuration

use anyhow::{Context, Result};
use dashline_types::ColorMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_version() -> u32 {
    1
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Whether widgets emit ANSI styling
    #[serde(default)]
    pub color_mode: ColorMode,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "dashline")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config '{}'", path.display()))
    }

    /// Save configuration to a specific file path, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write config '{}'", path.display()))
    }

    /// Load `path` (or the default location), falling back to defaults on
    /// any failure so a bad config never blanks the status line
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let loaded = match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        };

        match loaded {
            Ok(config) => {
                log::info!("Loaded configuration (version {})", config.version);
                config
            }
            Err(e) => {
                log::warn!("Failed to load configuration, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Color mode after applying a command-line override
    pub fn effective_color_mode(&self, cli_override: Option<ColorMode>) -> ColorMode {
        cli_override.unwrap_or(self.color_mode)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            color_mode: ColorMode::Auto,
        }
    }
}
