//! Record types for `_cat` responses.
//!
//! The helpers return `_cat` results verbatim. These types are a typed view
//! for callers that want to render or filter the rows.

use serde::{Deserialize, Serialize};

/// One row of `_cat/indices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStatus {
    pub index: String,
    /// Missing for closed indices.
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "docs.count")]
    pub docs_count: Option<String>,
    #[serde(default, rename = "store.size")]
    pub store_size: Option<String>,
}

/// One row of `_cat/shards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardPlacement {
    pub index: String,
    pub shard: String,
    /// `p` for a primary, `r` for a replica.
    pub prirep: String,
    pub state: String,
    #[serde(default)]
    pub docs: Option<String>,
    #[serde(default)]
    pub store: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    /// Missing for unassigned shards.
    #[serde(default)]
    pub node: Option<String>,
}

impl ShardPlacement {
    pub fn is_primary(&self) -> bool {
        self.prirep == "p"
    }
}
