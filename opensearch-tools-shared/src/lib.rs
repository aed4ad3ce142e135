//! # OpenSearch Tools Shared
//!
//! Request models consumed by the OpenSearch tool helpers, together with the
//! record types callers use to read `_cat` responses.

pub mod args;
pub mod errors;
pub mod records;
pub mod version;

pub use args::{
    BaseToolArgs, GetIndexMappingArgs, GetShardsArgs, ListIndicesArgs, SearchIndexArgs, ToolArgs,
};
pub use errors::ToolArgsError;
pub use records::{IndexStatus, ShardPlacement};
pub use version::ClusterVersion;
