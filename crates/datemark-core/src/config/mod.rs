//! Configuration management for datemark.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults when no file exists. Watermark settings themselves (size, color,
//! position) arrive from the CLI; the config file covers the ambient
//! concerns: which extensions to scan for, where fonts live, how the output
//! directory is named, and how logs are emitted.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for datemark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Processing settings
    pub processing: ProcessingConfig,

    /// Font resolution settings
    pub fonts: FontConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.datemark.datemark/config.toml
    /// - Linux: ~/.config/datemark/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\datemark\config\config.toml
    ///
    /// Falls back to ~/.datemark/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "datemark", "datemark")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".datemark").join("config.toml")
            })
    }

    /// Font candidates in resolution order, with `~` expanded.
    ///
    /// The configured `font_path` (if any) comes first, then the fallback
    /// list.
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        self.fonts
            .font_path
            .iter()
            .chain(self.fonts.fallback_paths.iter())
            .map(|p| {
                let raw = p.to_string_lossy();
                let expanded = shellexpand::tilde(raw.as_ref());
                PathBuf::from(expanded.into_owned())
            })
            .collect()
    }
}
