//! Configuration module for the hlx CLI.
//!
//! This module handles locating and loading the optional `hlx.toml` file.
//! Every setting has a default, so a missing file is not an error; values
//! given on the command line take precedence over the file.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{HlxError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "hlx.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Report rendering options.
    #[serde(default)]
    pub output: OutputConfig,

    /// Glyph metrics used to compute horizontal token offsets.
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Report rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default report format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

/// Glyph metrics options.
///
/// `table` wins over `monospace` when both are set. With neither, tokens
/// are reported at horizontal offset zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsConfig {
    /// JSON advance table to load.
    #[serde(default)]
    pub table: Option<PathBuf>,

    /// Uniform advance width for every glyph.
    #[serde(default)]
    pub monospace: Option<f32>,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/hlx/`
    /// 3. Platform configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HlxError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| HlxError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("hlx").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("hlx").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
