//! Configuration management for roster CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Characters file to edit
    pub data_path: Option<PathBuf>,

    /// Allow-list file to use instead of the built-in one
    pub targets_path: Option<PathBuf>,

    /// Element to assign
    pub element: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("roster");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if there is none
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::debug!("{e:#}; using default configuration");
                Ok(Config::default())
            }
        }
    }

    /// Load configuration from a specific file, or defaults if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "loaded configuration");

        Ok(config)
    }
}
