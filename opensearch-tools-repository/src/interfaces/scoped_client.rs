//! Scoped client guard.

use std::ops::Deref;

use tracing::debug;

use crate::errors::ClientError;
use crate::interfaces::{ClientProvisioner, OpenSearchApi};
use opensearch_tools_shared::BaseToolArgs;

/// A provisioned client that is released when it goes out of scope.
///
/// The guard dereferences to the client. Dropping it hands the client back
/// to its provisioner, so release happens on normal return, on an early `?`
/// return and when the enclosing future is dropped mid-call.
pub struct ScopedClient<'p> {
    provisioner: &'p dyn ClientProvisioner,
    client: Box<dyn OpenSearchApi>,
    cluster_name: String,
}

impl<'p> ScopedClient<'p> {
    /// Acquire a client for the cluster named in `args`.
    ///
    /// Nothing is released if acquisition fails, since nothing was acquired.
    pub async fn acquire(
        provisioner: &'p dyn ClientProvisioner,
        args: &BaseToolArgs,
    ) -> Result<ScopedClient<'p>, ClientError> {
        let client = provisioner.acquire(args).await?;
        debug!(cluster = %args.cluster_name(), "Acquired client");

        Ok(Self {
            provisioner,
            client,
            cluster_name: args.cluster_name().to_string(),
        })
    }
}

impl Deref for ScopedClient<'_> {
    type Target = dyn OpenSearchApi;

    fn deref(&self) -> &Self::Target {
        self.client.as_ref()
    }
}

impl Drop for ScopedClient<'_> {
    fn drop(&mut self) {
        self.provisioner.release(self.client.as_ref());
        debug!(cluster = %self.cluster_name, "Released client");
    }
}
