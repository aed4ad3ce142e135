//! Subcommand dispatch.
//!
//! Each subcommand builds the request model for one helper, calls it and
//! renders the result. Helper failures are returned as-is.

use clap::Subcommand;
use serde_json::{json, Value};
use tracing::info;

use crate::output::{self, OutputFormat};
use crate::ToolsError;
use opensearch_tools_repository::OpenSearchHelper;
use opensearch_tools_shared::{
    BaseToolArgs, GetIndexMappingArgs, GetShardsArgs, ListIndicesArgs, SearchIndexArgs,
};

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the indices of the cluster
    ListIndices,
    /// Show the mapping of an index
    GetMapping {
        /// Index name
        #[arg(long)]
        index: String,
    },
    /// Run a search request against an index
    Search {
        /// Index name
        #[arg(long)]
        index: String,
        /// Search request body as a JSON object
        #[arg(long)]
        query: String,
    },
    /// Show the shard placement of an index
    GetShards {
        /// Index name
        #[arg(long)]
        index: String,
    },
    /// Print the cluster version, or `unknown`
    Version,
}

impl Command {
    /// Run the command against `cluster` and render its result.
    pub async fn execute(
        self,
        helper: &OpenSearchHelper,
        cluster: &str,
        format: OutputFormat,
    ) -> Result<String, ToolsError> {
        match self {
            Command::ListIndices => {
                let args = ListIndicesArgs::new().with_cluster(cluster);
                let indices = helper.list_indices(&args).await?;
                match format {
                    OutputFormat::Table => output::render_indices(&indices),
                    OutputFormat::Json => output::render_json(&indices),
                }
            }
            Command::GetMapping { index } => {
                let args = GetIndexMappingArgs::new(index)?.with_cluster(cluster);
                let mapping = helper.get_index_mapping(&args).await?;
                output::render_json(&mapping)
            }
            Command::Search { index, query } => {
                let query: Value = serde_json::from_str(&query)?;
                let args = SearchIndexArgs::new(index, query)?.with_cluster(cluster);
                let response = helper.search_index(&args).await?;
                output::render_json(&response)
            }
            Command::GetShards { index } => {
                let args = GetShardsArgs::new(index)?.with_cluster(cluster);
                let shards = helper.get_shards(&args).await?;
                match format {
                    OutputFormat::Table => output::render_shards(&shards),
                    OutputFormat::Json => output::render_json(&shards),
                }
            }
            Command::Version => {
                let version = helper
                    .get_opensearch_version(&BaseToolArgs::new(cluster))
                    .await;
                if version.is_none() {
                    info!(cluster = %cluster, "Cluster version is unknown");
                }
                match format {
                    OutputFormat::Table => Ok(version
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "unknown".to_string())),
                    OutputFormat::Json => output::render_json(&json!({ "version": version })),
                }
            }
        }
    }
}
