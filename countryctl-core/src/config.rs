use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{CountryError, Result};
use crate::format::DEFAULT_SEPARATOR;

/// Upstream endpoint returning every country as a JSON array
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Configuration for countryctl, read from ~/.countryctl/config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Country list endpoint
    pub endpoint: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before typed text is applied to the filter
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Digit grouping separator for populations
    pub thousands_separator: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separator: DEFAULT_SEPARATOR,
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults when the file does
    /// not exist. Environment overrides are applied last.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            Self::from_toml(&content)
                .map_err(|err| CountryError::config(path, err.to_string()))?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get config file path: ~/.countryctl/config.toml
    pub fn config_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get log file path used while the TUI owns the terminal
    pub fn log_path() -> PathBuf {
        Self::home_dir().join("countryctl.log")
    }

    fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".countryctl")
    }

    /// Apply COUNTRYCTL_* environment overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = env::var("COUNTRYCTL_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.api.endpoint = endpoint;
            }
        }

        if let Ok(raw) = env::var("COUNTRYCTL_DEBOUNCE_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => self.search.debounce_ms = ms,
                Err(_) => tracing::warn!(value = %raw, "Ignoring invalid COUNTRYCTL_DEBOUNCE_MS"),
            }
        }
    }

    /// Debounce delay as a Duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
