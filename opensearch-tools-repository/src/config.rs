//! Cluster configuration for the OpenSearch provisioner.
//!
//! A provisioner knows at most one default cluster, used when a request
//! leaves the cluster name empty, plus any number of named clusters loaded
//! from a YAML file of the form:
//!
//! ```yaml
//! clusters:
//!   local:
//!     opensearch_url: http://localhost:9200
//!   prod:
//!     opensearch_url: https://search.example.com:9200
//!     opensearch_username: admin
//!     opensearch_password: secret
//!     timeout_secs: 30
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::errors::ConfigError;

/// Connection settings for a single cluster.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClusterConfig {
    pub opensearch_url: String,
    #[serde(default)]
    pub opensearch_username: Option<String>,
    #[serde(default)]
    pub opensearch_password: Option<String>,
    /// Request timeout applied by the transport.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClusterConfig {
    /// Create a config for `url` without credentials or timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            opensearch_url: url.into(),
            opensearch_username: None,
            opensearch_password: None,
            timeout_secs: None,
        }
    }

    /// Use basic authentication.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.opensearch_username = Some(username.into());
        self.opensearch_password = Some(password.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// The cluster URL without any user or password it embeds.
    pub fn redacted_url(&self) -> String {
        match Url::parse(&self.opensearch_url) {
            Ok(mut url) => {
                let _ = url.set_username("");
                let _ = url.set_password(None);
                url.to_string()
            }
            Err(_) => "<invalid url>".to_string(),
        }
    }

    /// Username and password, when both are set.
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (&self.opensearch_username, &self.opensearch_password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

// Keeps passwords out of logs.
impl fmt::Debug for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("opensearch_url", &self.redacted_url())
            .field("opensearch_username", &self.opensearch_username)
            .field(
                "opensearch_password",
                &self.opensearch_password.as_ref().map(|_| "***"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ClusterFile {
    #[serde(default)]
    clusters: HashMap<String, ClusterConfig>,
}

/// The set of clusters a provisioner can hand out clients for.
#[derive(Debug, Clone, Default)]
pub struct ProvisionerConfig {
    /// Cluster used for an empty cluster name.
    pub default_cluster: Option<ClusterConfig>,
    /// Clusters addressed by name.
    pub clusters: HashMap<String, ClusterConfig>,
}

impl ProvisionerConfig {
    /// Create a config with only a default cluster.
    pub fn with_default(cluster: ClusterConfig) -> Self {
        Self {
            default_cluster: Some(cluster),
            clusters: HashMap::new(),
        }
    }

    /// Add a named cluster, replacing any previous entry with that name.
    pub fn with_cluster(mut self, name: impl Into<String>, cluster: ClusterConfig) -> Self {
        self.clusters.insert(name.into(), cluster);
        self
    }

    /// Parse named clusters from YAML and merge them into this config.
    pub fn merge_yaml(mut self, yaml: &str) -> Result<Self, ConfigError> {
        let file: ClusterFile = serde_yaml::from_str(yaml)?;
        for (name, cluster) in file.clusters {
            if name.is_empty() {
                return Err(ConfigError::invalid(
                    "cluster names in the cluster file must not be empty",
                ));
            }
            check_cluster(&name, &cluster)?;
            self.clusters.insert(name, cluster);
        }
        Ok(self)
    }

    /// Read named clusters from a YAML file and merge them into this config.
    pub fn merge_file(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.merge_yaml(&yaml)
    }

    /// Look up the cluster for `name`. The empty name selects the default.
    pub fn resolve(&self, name: &str) -> Option<&ClusterConfig> {
        if name.is_empty() {
            self.default_cluster.as_ref()
        } else {
            self.clusters.get(name)
        }
    }

    /// Names of the configured named clusters, sorted.
    pub fn cluster_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.clusters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn check_cluster(name: &str, cluster: &ClusterConfig) -> Result<(), ConfigError> {
    if cluster.opensearch_url.trim().is_empty() {
        return Err(ConfigError::invalid(format!(
            "cluster '{}' has no opensearch_url",
            name
        )));
    }
    if cluster.opensearch_username.is_some() != cluster.opensearch_password.is_some() {
        return Err(ConfigError::invalid(format!(
            "cluster '{}' must set opensearch_username and opensearch_password together",
            name
        )));
    }
    if cluster.timeout_secs == Some(0) {
        return Err(ConfigError::invalid(format!(
            "cluster '{}' has a zero timeout_secs",
            name
        )));
    }
    Ok(())
}
