//! Dependency initialization and wiring for the OpenSearch tools.

use std::env;
use std::sync::Arc;
use tracing::info;

use crate::ToolsError;
use opensearch_tools_repository::{
    ClusterConfig, OpenSearchHelper, OpenSearchProvisioner, ProvisionerConfig,
};

/// Default cluster URL.
const OPENSEARCH_URL: &str = "OPENSEARCH_URL";
/// Basic auth username for the default cluster.
const OPENSEARCH_USERNAME: &str = "OPENSEARCH_USERNAME";
/// Basic auth password for the default cluster.
const OPENSEARCH_PASSWORD: &str = "OPENSEARCH_PASSWORD";
/// Request timeout in seconds for the default cluster.
const OPENSEARCH_TIMEOUT_SECS: &str = "OPENSEARCH_TIMEOUT_SECS";
/// Path to a YAML file of named clusters.
const OPENSEARCH_CLUSTERS_FILE: &str = "OPENSEARCH_CLUSTERS_FILE";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The helper used to run commands.
    pub helper: OpenSearchHelper,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: URL of the default cluster (no default cluster when unset)
    /// - `OPENSEARCH_USERNAME` / `OPENSEARCH_PASSWORD`: basic auth for the default cluster
    /// - `OPENSEARCH_TIMEOUT_SECS`: request timeout for the default cluster
    /// - `OPENSEARCH_CLUSTERS_FILE`: YAML file of named clusters
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(ToolsError)` - If the configuration is invalid
    pub fn from_env() -> Result<Self, ToolsError> {
        let config = provisioner_config(|key| env::var(key).ok())?;
        let provisioner = OpenSearchProvisioner::new(config);

        info!("Dependencies initialized");

        Ok(Self {
            helper: OpenSearchHelper::new(Arc::new(provisioner)),
        })
    }
}

/// Build the provisioner configuration from a variable lookup.
pub fn provisioner_config(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ProvisionerConfig, ToolsError> {
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let mut config = ProvisionerConfig::default();

    if let Some(url) = lookup(OPENSEARCH_URL) {
        let mut cluster = ClusterConfig::new(url);
        match (lookup(OPENSEARCH_USERNAME), lookup(OPENSEARCH_PASSWORD)) {
            (Some(username), Some(password)) => {
                cluster = cluster.with_basic_auth(username, password);
            }
            (None, None) => {}
            _ => {
                return Err(ToolsError::config(format!(
                    "{} and {} must be set together",
                    OPENSEARCH_USERNAME, OPENSEARCH_PASSWORD
                )));
            }
        }
        if let Some(timeout) = lookup(OPENSEARCH_TIMEOUT_SECS) {
            let secs = timeout.parse::<u64>().map_err(|e| {
                ToolsError::config(format!("Invalid {}: {}", OPENSEARCH_TIMEOUT_SECS, e))
            })?;
            if secs == 0 {
                return Err(ToolsError::config(format!(
                    "{} must be greater than zero",
                    OPENSEARCH_TIMEOUT_SECS
                )));
            }
            cluster = cluster.with_timeout_secs(secs);
        }

        info!(opensearch_url = %cluster.redacted_url(), "Configured default cluster");
        config.default_cluster = Some(cluster);
    }

    if let Some(path) = lookup(OPENSEARCH_CLUSTERS_FILE) {
        config = config.merge_file(&path)?;
        info!(path = %path, clusters = ?config.cluster_names(), "Loaded cluster file");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_cluster_from_env() {
        let config = provisioner_config(lookup(&[
            ("OPENSEARCH_URL", "http://localhost:9200"),
            ("OPENSEARCH_USERNAME", "admin"),
            ("OPENSEARCH_PASSWORD", "secret"),
            ("OPENSEARCH_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        let cluster = config.resolve("").unwrap();
        assert_eq!(cluster.opensearch_url, "http://localhost:9200");
        assert_eq!(cluster.basic_auth(), Some(("admin", "secret")));
        assert_eq!(cluster.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_no_url_means_no_default() {
        let config = provisioner_config(lookup(&[("OPENSEARCH_URL", "  ")])).unwrap();
        assert!(config.resolve("").is_none());
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let result = provisioner_config(lookup(&[
            ("OPENSEARCH_URL", "http://localhost:9200"),
            ("OPENSEARCH_USERNAME", "admin"),
        ]));
        assert!(matches!(result, Err(ToolsError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let result = provisioner_config(lookup(&[
            ("OPENSEARCH_URL", "http://localhost:9200"),
            ("OPENSEARCH_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(result, Err(ToolsError::ConfigError(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = provisioner_config(lookup(&[
            ("OPENSEARCH_URL", "http://localhost:9200"),
            ("OPENSEARCH_TIMEOUT_SECS", "0"),
        ]));
        assert!(matches!(result, Err(ToolsError::ConfigError(_))));
    }

    #[test]
    fn test_missing_clusters_file() {
        let result = provisioner_config(lookup(&[(
            "OPENSEARCH_CLUSTERS_FILE",
            "/nonexistent/clusters.yml",
        )]));
        assert!(matches!(result, Err(ToolsError::ClusterFile(_))));
    }
}
