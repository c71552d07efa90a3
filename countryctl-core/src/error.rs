//! Structured error types for countryctl-core.
//!
//! Uses `thiserror` so the library exposes composable errors.
//! The `countryctl` binary wraps these in `anyhow` for convenience.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The only message a user ever sees when the country list cannot be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch countries. Please try again later.";

/// Main error type for countryctl-core operations
#[derive(Error, Debug)]
pub enum CountryError {
    /// Request never produced a response (DNS, connect, timeout, TLS)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body did not match the country schema
    #[error("Malformed country list: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error in {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Result type alias for countryctl-core operations
pub type Result<T> = std::result::Result<T, CountryError>;

impl CountryError {
    /// Create a configuration error
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means "the country list could not be retrieved".
    ///
    /// Transport failures, bad statuses and malformed bodies all collapse into
    /// this single kind as far as the user is concerned.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        if self.is_retrieval() {
            FETCH_FAILED_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
