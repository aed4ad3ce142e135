//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `OpenSearchApi`
//! using the OpenSearch Rust client.

use std::fmt;

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cat::{CatIndicesParts, CatShardsParts},
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::IndicesGetMappingParts,
    OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::config::ClusterConfig;
use crate::errors::ClientError;
use crate::interfaces::{CatFormat, OpenSearchApi};

/// OpenSearch client implementation.
///
/// Each instance talks to a single node. Building one does not contact the
/// cluster; the first request does.
///
/// # Example
///
/// ```ignore
/// use opensearch_tools_repository::{ClusterConfig, OpenSearchApi, OpenSearchClient};
///
/// let client = OpenSearchClient::new(&ClusterConfig::new("http://localhost:9200"))?;
/// let indices = client.cat_indices().await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client for the given cluster.
    ///
    /// # Arguments
    ///
    /// * `cluster` - The cluster URL, optional credentials and timeout
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(ClientError)` - If the URL is invalid or transport setup fails
    pub fn new(cluster: &ClusterConfig) -> Result<Self, ClientError> {
        let parsed_url = Url::parse(&cluster.opensearch_url).map_err(|e| {
            ClientError::connection(format!("Invalid URL '{}': {}", cluster.opensearch_url, e))
        })?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();
        if let Some((username, password)) = cluster.basic_auth() {
            builder = builder.auth(Credentials::Basic(username.to_string(), password.to_string()));
        }
        if let Some(timeout) = cluster.timeout() {
            builder = builder.timeout(timeout);
        }
        let transport = builder
            .build()
            .map_err(|e| ClientError::connection(e.to_string()))?;

        debug!(url = %cluster.redacted_url(), "Created OpenSearch client");

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Check the response status and decode the body as JSON.
    async fn read_json(response: Response) -> Result<Value, ClientError> {
        let response = Self::check_status(response).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::parse(e.to_string()))
    }

    /// Check the response status and return the body as a JSON string.
    async fn read_text(response: Response) -> Result<Value, ClientError> {
        let response = Self::check_status(response).await?;
        response
            .text()
            .await
            .map(Value::String)
            .map_err(|e| ClientError::parse(e.to_string()))
    }

    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status_code();
        if status.is_success() {
            return Ok(response);
        }

        let body = error_body(response.text().await);
        error!(status = %status, body = %body, "OpenSearch request failed");
        Err(ClientError::remote(status.as_u16(), body))
    }
}

/// Body of a failed response, or the reason it could not be read.
fn error_body<E: fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<unreadable response body: {}>", e))
}

#[async_trait]
impl OpenSearchApi for OpenSearchClient {
    async fn cat_indices(&self) -> Result<Value, ClientError> {
        let response = self
            .client
            .cat()
            .indices(CatIndicesParts::None)
            .format("json")
            .send()
            .await
            .map_err(|e| ClientError::connection(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn get_mapping(&self, index: &str) -> Result<Value, ClientError> {
        let indices = [index];
        let response = self
            .client
            .indices()
            .get_mapping(IndicesGetMappingParts::Index(&indices))
            .send()
            .await
            .map_err(|e| ClientError::connection(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn search(&self, index: &str, body: &Value) -> Result<Value, ClientError> {
        let indices = [index];
        let response = self
            .client
            .search(SearchParts::Index(&indices))
            .body(body)
            .send()
            .await
            .map_err(|e| ClientError::connection(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn cat_shards(&self, index: &str, format: CatFormat) -> Result<Value, ClientError> {
        let indices = [index];
        let cat = self.client.cat();
        let request = cat.shards(CatShardsParts::Index(&indices));
        let request = match format.as_param() {
            Some(param) => request.format(param),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::connection(e.to_string()))?;

        match format {
            CatFormat::Json => Self::read_json(response).await,
            CatFormat::Text => Self::read_text(response).await,
        }
    }

    async fn info(&self) -> Result<Value, ClientError> {
        let response = self
            .client
            .info()
            .send()
            .await
            .map_err(|e| ClientError::connection(e.to_string()))?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenSearchClient {
        OpenSearchClient::new(&ClusterConfig::new(server.uri())).unwrap()
    }

    #[test]
    fn test_new_client() {
        assert!(OpenSearchClient::new(&ClusterConfig::new("http://localhost:9200")).is_ok());
    }

    #[test]
    fn test_new_client_with_auth_and_timeout() {
        let cluster = ClusterConfig::new("https://search.example.com:9200")
            .with_basic_auth("admin", "secret")
            .with_timeout_secs(5);
        assert!(OpenSearchClient::new(&cluster).is_ok());
    }

    #[test]
    fn test_new_client_invalid_url() {
        let result = OpenSearchClient::new(&ClusterConfig::new("not a url"));
        match result {
            Err(ClientError::ConnectionError(msg)) => assert!(msg.contains("not a url")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_error_body_keeps_read_failure() {
        assert_eq!(error_body::<String>(Ok("boom".to_string())), "boom");
        let body = error_body(Err(std::io::Error::other("connection reset")));
        assert!(body.contains("connection reset"));
        assert!(!body.is_empty());
    }

    #[test]
    fn test_cat_format_param() {
        assert_eq!(CatFormat::Json.as_param(), Some("json"));
        assert_eq!(CatFormat::Text.as_param(), None);
        assert_eq!(CatFormat::default(), CatFormat::Json);
    }

    #[tokio::test]
    async fn test_cat_indices_requests_json() {
        let server = MockServer::start().await;
        let rows = json!([{"index": "index1", "health": "green", "docs.count": "3"}]);
        Mock::given(method("GET"))
            .and(path("/_cat/indices"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&rows))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).cat_indices().await.unwrap();

        assert_eq!(result, rows);
    }

    #[tokio::test]
    async fn test_cat_shards_json() {
        let server = MockServer::start().await;
        let rows = json!([
            {"index": "test-index", "shard": "0", "prirep": "p", "state": "STARTED"}
        ]);
        Mock::given(method("GET"))
            .and(path("/_cat/shards/test-index"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&rows))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .cat_shards("test-index", CatFormat::Json)
            .await
            .unwrap();

        assert_eq!(result, rows);
    }

    #[tokio::test]
    async fn test_cat_shards_text() {
        let server = MockServer::start().await;
        let table = "test-index 0 p STARTED 3 4kb 10.0.0.1 node1\n";
        Mock::given(method("GET"))
            .and(path("/_cat/shards/test-index"))
            .respond_with(ResponseTemplate::new(200).set_body_string(table))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .cat_shards("test-index", CatFormat::Text)
            .await
            .unwrap();

        assert_eq!(result, Value::String(table.to_string()));
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].url.query_pairs().any(|(key, _)| key == "format"));
    }

    #[tokio::test]
    async fn test_get_mapping_not_found() {
        let server = MockServer::start().await;
        let body = r#"{"error":{"type":"index_not_found_exception"},"status":404}"#;
        Mock::given(method("GET"))
            .and(path("/missing/_mapping"))
            .respond_with(ResponseTemplate::new(404).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).get_mapping("missing").await;

        assert_eq!(result, Err(ClientError::remote(404, body)));
    }

    #[tokio::test]
    async fn test_search_forwards_body() {
        let server = MockServer::start().await;
        let query = json!({"query": {"match": {"title": "rust"}}, "size": 5});
        let hits = json!({"hits": {"total": {"value": 1}, "hits": [{"_id": "1"}]}});
        Mock::given(method("POST"))
            .and(path("/logs-2024/_search"))
            .and(body_json(&query))
            .respond_with(ResponseTemplate::new(200).set_body_json(&hits))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).search("logs-2024", &query).await.unwrap();

        assert_eq!(result, hits);
    }

    #[tokio::test]
    async fn test_info_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).info().await;

        assert!(matches!(result, Err(ClientError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_info() {
        let server = MockServer::start().await;
        let info = json!({"name": "node1", "version": {"number": "2.11.1"}});
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&info))
            .mount(&server)
            .await;

        let result = client_for(&server).info().await.unwrap();

        assert_eq!(result, info);
    }
}
