//! Interface definitions for cluster clients.
//!
//! `OpenSearchApi` is the set of remote calls the helpers issue, and
//! `ClientProvisioner` hands out one client per call for a given cluster.
//! Both are traits so tests and callers can inject their own backends.

mod client_provisioner;
mod opensearch_api;
mod scoped_client;

pub use client_provisioner::ClientProvisioner;
pub use opensearch_api::{CatFormat, OpenSearchApi};
pub use scoped_client::ScopedClient;
