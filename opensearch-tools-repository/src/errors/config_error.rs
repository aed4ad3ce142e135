//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading cluster configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The cluster file is not valid YAML for the expected layout.
    #[error("Invalid cluster file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create an invalid configuration error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
