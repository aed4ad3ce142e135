//! Provisioner building OpenSearch clients from cluster configuration.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::ProvisionerConfig;
use crate::errors::ClientError;
use crate::interfaces::{ClientProvisioner, OpenSearchApi};
use crate::opensearch::OpenSearchClient;
use opensearch_tools_shared::BaseToolArgs;

const DEFAULT_CLUSTER_LABEL: &str = "(default)";

/// Hands out a fresh [`OpenSearchClient`] per call.
///
/// An empty cluster name resolves to the default cluster; any other name must
/// be one of the configured named clusters.
pub struct OpenSearchProvisioner {
    config: ProvisionerConfig,
}

impl OpenSearchProvisioner {
    pub fn new(config: ProvisionerConfig) -> Self {
        info!(
            has_default = config.default_cluster.is_some(),
            clusters = ?config.cluster_names(),
            "Created OpenSearch provisioner"
        );
        Self { config }
    }
}

#[async_trait]
impl ClientProvisioner for OpenSearchProvisioner {
    async fn acquire(&self, args: &BaseToolArgs) -> Result<Box<dyn OpenSearchApi>, ClientError> {
        let name = args.cluster_name();
        let cluster = self.config.resolve(name).ok_or_else(|| {
            ClientError::unknown_cluster(if name.is_empty() {
                DEFAULT_CLUSTER_LABEL
            } else {
                name
            })
        })?;

        let client = OpenSearchClient::new(cluster)?;
        Ok(Box::new(client))
    }

    fn release(&self, _client: &dyn OpenSearchApi) {
        // The transport is owned by the client and closes when it is dropped.
        debug!("Releasing OpenSearch client");
    }
}
