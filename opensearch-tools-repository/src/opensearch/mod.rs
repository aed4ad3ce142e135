//! OpenSearch implementation of the client interfaces.
//!
//! This module provides `OpenSearchClient`, which issues the helper calls
//! against a real cluster, and `OpenSearchProvisioner`, which builds one
//! client per call from the configured clusters.

mod client;
mod provisioner;

pub use client::OpenSearchClient;
pub use provisioner::OpenSearchProvisioner;
