//! # OpenSearch Tools Repository
//!
//! This crate provides the helper operations used by the OpenSearch tools:
//! listing indices, fetching mappings, searching, inspecting shards and
//! probing the cluster version. Each helper provisions a scoped client for
//! the requested cluster, issues one remote call and hands the response back
//! untouched.
//!
//! The client and its provisioner are traits so that callers can swap the
//! OpenSearch-backed implementation for their own.

pub mod config;
pub mod errors;
pub mod helper;
pub mod interfaces;
pub mod opensearch;

pub use config::{ClusterConfig, ProvisionerConfig};
pub use errors::{ClientError, ConfigError};
pub use helper::OpenSearchHelper;
pub use interfaces::{CatFormat, ClientProvisioner, OpenSearchApi, ScopedClient};
pub use crate::opensearch::{OpenSearchClient, OpenSearchProvisioner};
