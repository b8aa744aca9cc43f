#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Elemgen configuration.
//!
//! This crate provides configuration management for elemgen. It handles
//! loading and saving the configuration file that specifies:
//! - where the element catalog comes from
//! - where generated artifacts are written
//! - logging verbosity
//!
//! Configuration is stored in TOML format and can be loaded from a file or
//! created with sensible defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Element catalog source settings
    pub catalog: CatalogConfig,
    /// Generated-output settings
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Element catalog source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog TOML file. When absent, the element table embedded
    /// in the binary is used.
    pub input_path: Option<PathBuf>,
}

/// Generated-output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where to write the generated element files
    pub dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    pub level: String,
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/elemgen/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("elemgen");
        Ok(config_dir.join("config.toml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig { input_path: None },
            output: OutputConfig { dir: PathBuf::from("generated") },
            logging: LoggingConfig { level: "info".to_string() },
        }
    }
}
