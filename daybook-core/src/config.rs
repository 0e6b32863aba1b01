//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/daybook/config.toml` when present.
//! Every setting has a default, so the file is optional.
//!
//! Paths follow the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/daybook/` (~/.config/daybook/)
//! - State/Logs: `$XDG_STATE_HOME/daybook/` (~/.local/state/daybook/)
//!
//! The database itself defaults to `diary.db` in the working directory.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE_FILE: &str = "diary.db";

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Database location
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite file. Relative paths resolve against the working directory.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_FILE)
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        if config.logging.max_files == 0 {
            return Err(Error::Config(
                "logging.max_files must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    /// Returns the configured database file path
    pub fn database_path(&self) -> &Path {
        &self.database.path
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/daybook/config.toml` (~/.config/daybook/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("daybook").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/daybook/` (~/.local/state/daybook/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("daybook")
    }

    /// Returns the log file path prefix
    ///
    /// `$XDG_STATE_HOME/daybook/daybook.log` (~/.local/state/daybook/daybook.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("daybook.log")
    }
}
