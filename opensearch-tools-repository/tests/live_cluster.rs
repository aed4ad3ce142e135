//! Tests against a running OpenSearch node.
//!
//! These need a cluster at `OPENSEARCH_URL` (default `http://localhost:9200`).
//! Run with: cargo test -p opensearch-tools-repository --test live_cluster -- --ignored

use std::sync::Arc;

use opensearch_tools_repository::{
    ClientError, ClusterConfig, OpenSearchHelper, OpenSearchProvisioner, ProvisionerConfig,
};
use opensearch_tools_shared::{
    BaseToolArgs, GetIndexMappingArgs, GetShardsArgs, IndexStatus, ListIndicesArgs,
    SearchIndexArgs,
};
use serde_json::json;

fn helper() -> OpenSearchHelper {
    let url =
        std::env::var("OPENSEARCH_URL").unwrap_or_else(|_| "http://localhost:9200".to_string());
    let config = ProvisionerConfig::with_default(ClusterConfig::new(url));
    OpenSearchHelper::new(Arc::new(OpenSearchProvisioner::new(config)))
}

#[tokio::test]
#[ignore]
async fn test_version_and_indices() {
    let helper = helper();

    let version = helper
        .get_opensearch_version(&BaseToolArgs::default_cluster())
        .await;
    assert!(version.is_some(), "cluster should report a version");

    let indices = helper.list_indices(&ListIndicesArgs::new()).await.unwrap();
    let rows: Vec<IndexStatus> = serde_json::from_value(indices).unwrap();
    for row in rows {
        assert!(!row.index.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn test_missing_index_is_remote_error() {
    let helper = helper();
    let index = "opensearch-tools-missing-index";

    let mapping = helper
        .get_index_mapping(&GetIndexMappingArgs::new(index).unwrap())
        .await;
    assert!(matches!(
        mapping,
        Err(ClientError::RemoteError { status: 404, .. })
    ));

    let search = helper
        .search_index(&SearchIndexArgs::new(index, json!({"query": {"match_all": {}}})).unwrap())
        .await;
    assert!(matches!(search, Err(ClientError::RemoteError { .. })));

    let shards = helper.get_shards(&GetShardsArgs::new(index).unwrap()).await;
    assert!(matches!(shards, Err(ClientError::RemoteError { .. })));
}
