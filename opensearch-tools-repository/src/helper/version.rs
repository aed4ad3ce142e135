//! Cluster version probe.

use tracing::{debug, instrument, warn};

use super::OpenSearchHelper;
use crate::errors::ClientError;
use opensearch_tools_shared::{BaseToolArgs, ClusterVersion};

impl OpenSearchHelper {
    /// Read the version of the target cluster.
    ///
    /// Unlike the other helpers this never fails: any provisioning, remote or
    /// decoding failure is logged and reported as `None`, meaning "unknown".
    #[instrument(skip_all, fields(cluster = %args.cluster_name()))]
    pub async fn get_opensearch_version(&self, args: &BaseToolArgs) -> Option<ClusterVersion> {
        match self.fetch_version(args).await {
            Ok(version) => {
                debug!(version = %version, "Resolved cluster version");
                Some(version)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    connectivity = e.is_connectivity(),
                    "Unable to determine cluster version"
                );
                None
            }
        }
    }

    async fn fetch_version(&self, args: &BaseToolArgs) -> Result<ClusterVersion, ClientError> {
        let client = self.scoped_client(args).await?;
        let info = client.info().await?;
        ClusterVersion::from_info(&info)
            .ok_or_else(|| ClientError::parse("info response has no version.number"))
    }
}
