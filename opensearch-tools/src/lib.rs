//! # OpenSearch Tools
//!
//! Command-line front end for the OpenSearch tool helpers.
//!
//! This crate wires the helpers to clusters configured through the
//! environment, dispatches subcommands and renders their results.

pub mod commands;
pub mod config;
pub mod output;

pub use commands::Command;
pub use config::Dependencies;

use opensearch_tools_repository::{ClientError, ConfigError};
use opensearch_tools_shared::ToolArgsError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum ToolsError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Cluster file error.
    #[error(transparent)]
    ClusterFile(#[from] ConfigError),

    /// Invalid command arguments.
    #[error("Invalid arguments: {0}")]
    ArgsError(#[from] ToolArgsError),

    /// Failure reported by a helper, passed through unchanged.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// JSON input or output error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolsError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
