//! Configuration management

use crate::error::{ContactBookError, Result};
use crate::infrastructure::repository::DEFAULT_DATA_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "contactbook.toml";

/// Environment variable overriding the data file
pub const DATA_FILE_ENV: &str = "CONTACTBOOK_FILE";

/// Application configuration.
///
/// Resolved from (highest precedence first): the `--file` flag, the
/// `CONTACTBOOK_FILE` environment variable, a TOML config file, defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the contacts backing file
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Resolve the effective configuration for a run
    pub fn resolve(config_path: Option<&Path>, file_flag: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_from_dir(&std::env::current_dir()?)?,
        };

        Ok(config.with_overrides(std::env::var(DATA_FILE_ENV).ok(), file_flag))
    }

    /// Load contactbook.toml from a directory, falling back to defaults if absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(dir = %dir.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Self::load_from_file(&path)
    }

    /// Load an explicit config file, which must exist.
    ///
    /// A relative `data_file` is taken relative to the config file's directory.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ContactBookError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ContactBookError::Io(e)
            }
        })?;

        let mut config: Config = toml::from_str(&contents)?;
        if config.data_file.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_file = parent.join(&config.data_file);
            }
        }

        debug!(path = %path.display(), data_file = %config.data_file.display(), "loaded config");
        Ok(config)
    }

    /// Apply environment and command-line overrides
    pub fn with_overrides(mut self, env_file: Option<String>, file_flag: Option<PathBuf>) -> Self {
        if let Some(file) = env_file.filter(|f| !f.is_empty()) {
            self.data_file = PathBuf::from(file);
        }
        if let Some(file) = file_flag {
            self.data_file = file;
        }
        self
    }
}
