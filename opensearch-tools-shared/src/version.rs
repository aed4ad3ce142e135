//! Cluster version reported by the `info` endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `version.number` string of a cluster, e.g. `2.11.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterVersion(String);

impl ClusterVersion {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Extract the version from an `info` response document.
    ///
    /// Returns `None` when `version.number` is missing or not a string.
    pub fn from_info(info: &Value) -> Option<Self> {
        info.get("version")?
            .get("number")?
            .as_str()
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_info() {
        let info = json!({"version": {"number": "2.11.1", "distribution": "opensearch"}});
        let version = ClusterVersion::from_info(&info).unwrap();
        assert_eq!(version.to_string(), "2.11.1");
        assert_eq!(version.as_str(), "2.11.1");
    }

    #[test]
    fn test_from_info_missing_number() {
        assert!(ClusterVersion::from_info(&json!({"version": {}})).is_none());
        assert!(ClusterVersion::from_info(&json!({"version": {"number": 2}})).is_none());
        assert!(ClusterVersion::from_info(&json!({})).is_none());
    }
}
