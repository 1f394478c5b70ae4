// crates/rd-core/src/config.rs - Configuration System
//
// Loads the optional TOML configuration file and resolves the few settings
// the reminder tool lets users change.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--store, --config)
// 2. Config file (~/.config/rd/config.toml, or the --config path)
// 3. Built-in defaults
//
// EXAMPLE FILE:
// ```toml
// [store]
// path = "~/.rd.json"
//
// [display]
// limit = 9
//
// [schedule]
// default_time = "08:00"
// ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::format::DEFAULT_LIMIT;

/// Where the config file lives when --config isn't given
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/rd/config.toml";

/// Where the store lives when neither --store nor the config file says otherwise
pub const DEFAULT_STORE_PATH: &str = "~/.rd.json";

const TIME_FORMAT: &str = "%H:%M";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
///
/// Every section defaults, so a partial file (or none at all) is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RdConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Where reminders are persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store file path; a leading `~` is expanded to the home directory
    #[serde(default = "default_store_path")]
    pub path: String,
}

/// Listing output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How many reminders `rd` shows before summarizing the rest
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Schedule interpretation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Clock time (HH:MM) used when a schedule names only a day
    #[serde(default = "default_time")]
    pub default_time: String,
}

impl RdConfig {
    /// Store path with `~` expanded
    pub fn store_path(&self) -> PathBuf {
        expand_path(&self.store.path)
    }

    /// Parsed default time of day for day-only schedules
    pub fn default_time(&self) -> ConfigResult<NaiveTime> {
        NaiveTime::parse_from_str(&self.schedule.default_time, TIME_FORMAT).map_err(|_| {
            ConfigError::ValidationError(format!(
                "schedule.default_time '{}' is not a HH:MM time",
                self.schedule.default_time
            ))
        })
    }
}

/// Configuration loading and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from `explicit` or the default location
    ///
    /// A missing default file means built-in defaults. A missing file that
    /// the user named explicitly is an error.
    pub fn load_config(explicit: Option<&Path>) -> ConfigResult<RdConfig> {
        let config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path.display().to_string()));
                }
                Self::load_file(path)?
            }
            None => {
                let path = expand_path(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load_file(&path)?
                } else {
                    debug!("No config at {}, using defaults", path.display());
                    RdConfig::default()
                }
            }
        };

        Self::validate_config(&config)?;
        Ok(config)
    }

    fn load_file(path: &Path) -> ConfigResult<RdConfig> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: path.display().to_string(),
            error: e.to_string(),
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Catch values that would only fail later at runtime
    fn validate_config(config: &RdConfig) -> ConfigResult<()> {
        if config.display.limit == 0 {
            return Err(ConfigError::ValidationError(
                "display.limit must be at least 1".to_string(),
            ));
        }

        if config.store.path.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "store.path must not be empty".to_string(),
            ));
        }

        config.default_time()?;

        Ok(())
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}
fn default_limit() -> usize {
    DEFAULT_LIMIT
}
fn default_time() -> String {
    "08:00".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            default_time: default_time(),
        }
    }
}
