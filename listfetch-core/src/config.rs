//! listfetch configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. File passed explicitly (`--config <file>`)
//! 2. Per-user config, e.g. `~/.config/listfetch/config.json` on Linux
//! 3. Built-in defaults
//!
//! CLI flags such as `--url` are applied on top by the caller.
//!
//! ```json
//! {"base_url": "https://fetch-hiring.s3.amazonaws.com", "path": "/hiring.json", "timeout_seconds": 10}
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::fetch::{RetryPolicy, MIN_RETRY_INTERVAL};

/// Default endpoint host
pub const DEFAULT_BASE_URL: &str = "https://fetch-hiring.s3.amazonaws.com";

/// Default endpoint path
pub const DEFAULT_PATH: &str = "/hiring.json";

const CONFIG_FILE_NAME: &str = "config.json";
const MIN_TIMEOUT_SECONDS: u64 = 1;

/// Endpoint, timeout and retry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_path")]
    pub path: String,

    /// Per-request timeout
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Wait between a failed fetch and the next attempt
    #[serde(default = "default_retry_interval")]
    pub retry_interval_seconds: u64,

    /// Countdown granularity while waiting (one log line per tick)
    #[serde(default = "default_retry_tick")]
    pub retry_tick_seconds: u64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
            timeout_seconds: default_timeout(),
            retry_interval_seconds: default_retry_interval(),
            retry_tick_seconds: default_retry_tick(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_retry_interval() -> u64 {
    5
}

fn default_retry_tick() -> u64 {
    1
}

impl ListConfig {
    /// Full URL of the item list
    pub fn endpoint(&self) -> String {
        if self.path.is_empty() {
            return self.base_url.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    /// Request timeout, clamped to at least one second
    pub fn timeout(&self) -> Duration {
        if self.timeout_seconds < MIN_TIMEOUT_SECONDS {
            warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                self.timeout_seconds, MIN_TIMEOUT_SECONDS
            );
            return Duration::from_secs(MIN_TIMEOUT_SECONDS);
        }
        Duration::from_secs(self.timeout_seconds)
    }

    /// Retry timing, with the interval raised to [`MIN_RETRY_INTERVAL`]
    pub fn retry_policy(&self) -> RetryPolicy {
        let interval = Duration::from_secs(self.retry_interval_seconds);
        if interval < MIN_RETRY_INTERVAL {
            warn!(
                "Configured retry_interval_seconds={} is too low; using minimum of {:?}",
                self.retry_interval_seconds, MIN_RETRY_INTERVAL
            );
        }

        RetryPolicy {
            interval: interval.max(MIN_RETRY_INTERVAL),
            tick: Duration::from_secs(self.retry_tick_seconds),
        }
    }

    /// Reject endpoints reqwest would not be able to fetch
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
            });
        }
        Ok(())
    }

    /// Load and validate a config file that must exist
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve configuration with precedence: explicit file, user file, defaults
    ///
    /// An explicit path must exist; the user file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => {
                debug!("No config file found; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Platform-specific per-user config file location
    ///
    /// - Linux: `~/.config/listfetch/config.json`
    /// - macOS: `~/Library/Application Support/listfetch/config.json`
    /// - Windows: `%APPDATA%\listfetch\config\config.json`
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "listfetch")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
