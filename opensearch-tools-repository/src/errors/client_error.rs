//! Client error types.
//!
//! These are the failures a helper can hand back to its caller. Helpers pass
//! them through unchanged, so the variant and message a caller sees are the
//! ones produced by the provisioner or the remote call.

use thiserror::Error;

/// Errors that can occur while provisioning a client or calling the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Failed to establish or use a connection to the cluster.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// No cluster is configured under the requested name.
    #[error("Unknown cluster: '{0}'")]
    UnknownCluster(String),

    /// The cluster answered with a non-success status.
    #[error("Remote error (status {status}): {body}")]
    RemoteError { status: u16, body: String },

    /// Failed to decode the response from the cluster.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an unknown cluster error.
    pub fn unknown_cluster(name: impl Into<String>) -> Self {
        Self::UnknownCluster(name.into())
    }

    /// Create a remote error from a response status and body.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::RemoteError {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Whether the failure happened before the cluster produced an answer.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::ConnectionError(_) | Self::UnknownCluster(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ClientError::connection("refused").to_string(),
            "Connection error: refused"
        );
        assert_eq!(
            ClientError::remote(404, "index_not_found_exception").to_string(),
            "Remote error (status 404): index_not_found_exception"
        );
        assert_eq!(
            ClientError::unknown_cluster("prod").to_string(),
            "Unknown cluster: 'prod'"
        );
    }

    #[test]
    fn test_is_connectivity() {
        assert!(ClientError::connection("refused").is_connectivity());
        assert!(ClientError::unknown_cluster("x").is_connectivity());
        assert!(!ClientError::remote(400, "bad").is_connectivity());
        assert!(!ClientError::parse("eof").is_connectivity());
    }
}
