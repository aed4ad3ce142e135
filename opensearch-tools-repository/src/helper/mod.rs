//! Helper operations over a provisioned client.
//!
//! Each primary helper acquires a [`ScopedClient`] for the request's cluster,
//! issues exactly one remote call with the operation's own fields and returns
//! the response verbatim. Failures are propagated unchanged. The cluster name
//! is only used to provision the client and never reaches the remote call.
//!
//! The version probe lives in [`version`] and is the one helper that never
//! fails.

mod version;

use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::errors::ClientError;
use crate::interfaces::{CatFormat, ClientProvisioner, ScopedClient};
use opensearch_tools_shared::{
    GetIndexMappingArgs, GetShardsArgs, ListIndicesArgs, SearchIndexArgs, ToolArgs,
};

/// Entry point for the OpenSearch tool helpers.
///
/// The helper holds no per-call state and can be shared across tasks.
pub struct OpenSearchHelper {
    provisioner: Arc<dyn ClientProvisioner>,
}

impl OpenSearchHelper {
    /// Create a helper that provisions clients through `provisioner`.
    pub fn new(provisioner: Arc<dyn ClientProvisioner>) -> Self {
        Self { provisioner }
    }

    async fn scoped_client(
        &self,
        args: &impl ToolArgs,
    ) -> Result<ScopedClient<'_>, ClientError> {
        ScopedClient::acquire(self.provisioner.as_ref(), args.base()).await
    }

    /// List the indices of the target cluster.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The `_cat/indices` rows, untouched
    /// * `Err(ClientError)` - The provisioning or remote failure, untouched
    #[instrument(skip_all, fields(cluster = %args.cluster_name()))]
    pub async fn list_indices(&self, args: &ListIndicesArgs) -> Result<Value, ClientError> {
        let client = self.scoped_client(args).await?;
        client.cat_indices().await
    }

    /// Fetch the mapping of the requested index.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The mapping document keyed by index name, untouched
    /// * `Err(ClientError)` - The provisioning or remote failure, untouched
    #[instrument(skip_all, fields(cluster = %args.cluster_name(), index = %args.index()))]
    pub async fn get_index_mapping(
        &self,
        args: &GetIndexMappingArgs,
    ) -> Result<Value, ClientError> {
        let client = self.scoped_client(args).await?;
        client.get_mapping(args.index()).await
    }

    /// Run the request's query against the requested index.
    ///
    /// The query document is forwarded as-is.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The search response, untouched
    /// * `Err(ClientError)` - The provisioning or remote failure, untouched
    #[instrument(skip_all, fields(cluster = %args.cluster_name(), index = %args.index()))]
    pub async fn search_index(&self, args: &SearchIndexArgs) -> Result<Value, ClientError> {
        let client = self.scoped_client(args).await?;
        client.search(args.index(), args.query()).await
    }

    /// List the shard placement of the requested index.
    ///
    /// Rows are always requested in structured form.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The `_cat/shards` rows, untouched
    /// * `Err(ClientError)` - The provisioning or remote failure, untouched
    #[instrument(skip_all, fields(cluster = %args.cluster_name(), index = %args.index()))]
    pub async fn get_shards(&self, args: &GetShardsArgs) -> Result<Value, ClientError> {
        let client = self.scoped_client(args).await?;
        client.cat_shards(args.index(), CatFormat::Json).await
    }
}
