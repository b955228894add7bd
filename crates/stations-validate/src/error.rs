//! Error types for validation configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or checking a [`ValidationConfig`](crate::ValidationConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but its values are inconsistent.
    #[error("invalid config: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
