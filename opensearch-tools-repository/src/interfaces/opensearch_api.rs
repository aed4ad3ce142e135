//! Remote call surface used by the helpers.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ClientError;

/// Output format requested from a `_cat` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatFormat {
    /// Structured rows, one JSON object per line of the table.
    #[default]
    Json,
    /// The plain-text table OpenSearch renders by default.
    Text,
}

impl CatFormat {
    /// The `format` query parameter for this format, if one must be sent.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            CatFormat::Json => Some("json"),
            CatFormat::Text => None,
        }
    }
}

/// The remote calls a provisioned client can issue.
///
/// Every method maps to exactly one request against the cluster and returns
/// the decoded response body as-is.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a client can be held across
/// await points in multi-threaded runtimes.
#[async_trait]
pub trait OpenSearchApi: Send + Sync {
    /// List the indices of the cluster (`_cat/indices`).
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - An array of index-status rows
    /// * `Err(ClientError)` - If the call fails
    async fn cat_indices(&self) -> Result<Value, ClientError>;

    /// Fetch the mapping of a single index (`{index}/_mapping`).
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - An object keyed by index name
    /// * `Err(ClientError)` - If the call fails
    async fn get_mapping(&self, index: &str) -> Result<Value, ClientError>;

    /// Run a search request against an index (`{index}/_search`).
    ///
    /// `body` is sent unaltered.
    async fn search(&self, index: &str, body: &Value) -> Result<Value, ClientError>;

    /// List the shards of an index (`_cat/shards/{index}`).
    ///
    /// With [`CatFormat::Text`] the plain table is returned as a JSON string.
    async fn cat_shards(&self, index: &str, format: CatFormat) -> Result<Value, ClientError>;

    /// Fetch the cluster info document (`GET /`).
    async fn info(&self) -> Result<Value, ClientError>;
}
