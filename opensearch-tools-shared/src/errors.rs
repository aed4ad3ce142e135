//! Validation errors raised while building request models.

use thiserror::Error;

/// Errors that can occur when constructing a tool request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolArgsError {
    /// A required field was missing or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The index field did not name exactly one index.
    #[error("Invalid index name '{0}': expected a single index")]
    InvalidIndex(String),

    /// The search body was not a JSON object.
    #[error("Invalid query: expected a JSON object, got {0}")]
    InvalidQuery(&'static str),
}

impl ToolArgsError {
    /// Create a missing field error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Create an invalid index error.
    pub fn invalid_index(index: impl Into<String>) -> Self {
        Self::InvalidIndex(index.into())
    }
}
