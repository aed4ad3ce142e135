//! Client provisioner trait definition.

use async_trait::async_trait;

use crate::errors::ClientError;
use crate::interfaces::OpenSearchApi;
use opensearch_tools_shared::BaseToolArgs;

/// Resolves a cluster identity to a ready-to-use client.
///
/// Helpers never call `acquire` directly; they go through
/// [`ScopedClient::acquire`](crate::interfaces::ScopedClient::acquire), which
/// guarantees that `release` runs exactly once for every client handed out.
///
/// How a cluster name maps to an endpoint is entirely up to the
/// implementation. An empty cluster name selects the default cluster.
#[async_trait]
pub trait ClientProvisioner: Send + Sync {
    /// Produce a client for the cluster named in `args`.
    ///
    /// # Returns
    ///
    /// * `Ok(Box<dyn OpenSearchApi>)` - A client ready for one call
    /// * `Err(ClientError)` - If the cluster is unknown or unreachable
    async fn acquire(&self, args: &BaseToolArgs) -> Result<Box<dyn OpenSearchApi>, ClientError>;

    /// Return a client obtained from `acquire`.
    ///
    /// Called once per acquired client, right before it is dropped.
    fn release(&self, client: &dyn OpenSearchApi);
}
