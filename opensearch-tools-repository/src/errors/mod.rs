//! Error types for the OpenSearch tools repository.

mod client_error;
mod config_error;

pub use client_error::ClientError;
pub use config_error::ConfigError;
