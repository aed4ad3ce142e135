//! Request models for the OpenSearch tool helpers.
//!
//! Every request carries a [`BaseToolArgs`] naming the target cluster. The
//! cluster name only selects which client is provisioned; it is never part of
//! the remote call itself.
//!
//! Constructors validate their fields, and deserialization runs through the
//! same checks, so a request value that exists is always well-formed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ToolArgsError;

/// Identifies the target cluster of a tool call.
///
/// An empty cluster name selects the default cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseToolArgs {
    #[serde(default)]
    opensearch_cluster_name: String,
}

impl BaseToolArgs {
    /// Create arguments targeting the named cluster.
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            opensearch_cluster_name: cluster_name.into(),
        }
    }

    /// Create arguments targeting the default cluster.
    pub fn default_cluster() -> Self {
        Self::default()
    }

    /// The configured cluster name. Empty for the default cluster.
    pub fn cluster_name(&self) -> &str {
        &self.opensearch_cluster_name
    }

    /// Whether these arguments target the default cluster.
    pub fn is_default_cluster(&self) -> bool {
        self.opensearch_cluster_name.is_empty()
    }
}

/// Common access to the cluster selection of any request model.
pub trait ToolArgs {
    /// The base arguments used to provision a client.
    fn base(&self) -> &BaseToolArgs;

    /// Shorthand for `self.base().cluster_name()`.
    fn cluster_name(&self) -> &str {
        self.base().cluster_name()
    }
}

impl ToolArgs for BaseToolArgs {
    fn base(&self) -> &BaseToolArgs {
        self
    }
}

/// Arguments for listing the indices of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListIndicesArgs {
    #[serde(flatten)]
    base: BaseToolArgs,
}

impl ListIndicesArgs {
    /// Create arguments targeting the default cluster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Target the named cluster.
    pub fn with_cluster(mut self, cluster_name: impl Into<String>) -> Self {
        self.base = BaseToolArgs::new(cluster_name);
        self
    }
}

impl ToolArgs for ListIndicesArgs {
    fn base(&self) -> &BaseToolArgs {
        &self.base
    }
}

/// Arguments for fetching the mapping of a single index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedIndexArgs")]
pub struct GetIndexMappingArgs {
    #[serde(flatten)]
    base: BaseToolArgs,
    index: String,
}

impl GetIndexMappingArgs {
    /// Create arguments for `index` on the default cluster.
    pub fn new(index: impl Into<String>) -> Result<Self, ToolArgsError> {
        Ok(Self {
            base: BaseToolArgs::default(),
            index: validate_index(index.into())?,
        })
    }

    /// Target the named cluster.
    pub fn with_cluster(mut self, cluster_name: impl Into<String>) -> Self {
        self.base = BaseToolArgs::new(cluster_name);
        self
    }

    pub fn index(&self) -> &str {
        &self.index
    }
}

impl ToolArgs for GetIndexMappingArgs {
    fn base(&self) -> &BaseToolArgs {
        &self.base
    }
}

impl TryFrom<UncheckedIndexArgs> for GetIndexMappingArgs {
    type Error = ToolArgsError;

    fn try_from(raw: UncheckedIndexArgs) -> Result<Self, Self::Error> {
        let mut args = Self::new(raw.index)?;
        args.base = raw.base;
        Ok(args)
    }
}

/// Arguments for running a search request against a single index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedSearchArgs")]
pub struct SearchIndexArgs {
    #[serde(flatten)]
    base: BaseToolArgs,
    index: String,
    query: Value,
}

impl SearchIndexArgs {
    /// Create arguments searching `index` with the request body `query`.
    ///
    /// The body must be a JSON object. Its contents are not inspected.
    pub fn new(index: impl Into<String>, query: Value) -> Result<Self, ToolArgsError> {
        Ok(Self {
            base: BaseToolArgs::default(),
            index: validate_index(index.into())?,
            query: validate_query(query)?,
        })
    }

    /// Target the named cluster.
    pub fn with_cluster(mut self, cluster_name: impl Into<String>) -> Self {
        self.base = BaseToolArgs::new(cluster_name);
        self
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// The search request body.
    pub fn query(&self) -> &Value {
        &self.query
    }
}

impl ToolArgs for SearchIndexArgs {
    fn base(&self) -> &BaseToolArgs {
        &self.base
    }
}

impl TryFrom<UncheckedSearchArgs> for SearchIndexArgs {
    type Error = ToolArgsError;

    fn try_from(raw: UncheckedSearchArgs) -> Result<Self, Self::Error> {
        let mut args = Self::new(raw.index, raw.query)?;
        args.base = raw.base;
        Ok(args)
    }
}

/// Arguments for inspecting the shard placement of a single index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedIndexArgs")]
pub struct GetShardsArgs {
    #[serde(flatten)]
    base: BaseToolArgs,
    index: String,
}

impl GetShardsArgs {
    /// Create arguments for `index` on the default cluster.
    pub fn new(index: impl Into<String>) -> Result<Self, ToolArgsError> {
        Ok(Self {
            base: BaseToolArgs::default(),
            index: validate_index(index.into())?,
        })
    }

    /// Target the named cluster.
    pub fn with_cluster(mut self, cluster_name: impl Into<String>) -> Self {
        self.base = BaseToolArgs::new(cluster_name);
        self
    }

    pub fn index(&self) -> &str {
        &self.index
    }
}

impl ToolArgs for GetShardsArgs {
    fn base(&self) -> &BaseToolArgs {
        &self.base
    }
}

impl TryFrom<UncheckedIndexArgs> for GetShardsArgs {
    type Error = ToolArgsError;

    fn try_from(raw: UncheckedIndexArgs) -> Result<Self, Self::Error> {
        let mut args = Self::new(raw.index)?;
        args.base = raw.base;
        Ok(args)
    }
}

#[derive(Deserialize)]
struct UncheckedIndexArgs {
    #[serde(flatten)]
    base: BaseToolArgs,
    #[serde(default)]
    index: String,
}

#[derive(Deserialize)]
struct UncheckedSearchArgs {
    #[serde(flatten)]
    base: BaseToolArgs,
    #[serde(default)]
    index: String,
    #[serde(default)]
    query: Value,
}

fn validate_index(index: String) -> Result<String, ToolArgsError> {
    if index.trim().is_empty() {
        return Err(ToolArgsError::missing("index"));
    }
    if index.contains(',') {
        return Err(ToolArgsError::invalid_index(index));
    }
    Ok(index)
}

fn validate_query(query: Value) -> Result<Value, ToolArgsError> {
    let kind = match &query {
        Value::Object(_) => return Ok(query),
        Value::Null => return Err(ToolArgsError::missing("query")),
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
    };
    Err(ToolArgsError::InvalidQuery(kind))
}
