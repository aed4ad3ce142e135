//! Rendering of helper results.

use clap::ValueEnum;
use serde_json::Value;

use crate::ToolsError;
use opensearch_tools_shared::{IndexStatus, ShardPlacement};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, exactly as returned by the cluster.
    #[default]
    Json,
    /// Aligned columns for `_cat` results; other results fall back to JSON.
    Table,
}

pub fn render_json(value: &Value) -> Result<String, ToolsError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render `_cat/indices` rows as a table.
pub fn render_indices(value: &Value) -> Result<String, ToolsError> {
    let rows: Vec<IndexStatus> = serde_json::from_value(value.clone())?;
    let rows = rows
        .into_iter()
        .map(|row| {
            vec![
                row.health.unwrap_or_default(),
                row.status.unwrap_or_default(),
                row.index,
                row.docs_count.unwrap_or_default(),
                row.store_size.unwrap_or_default(),
            ]
        })
        .collect();
    Ok(render_table(
        &["health", "status", "index", "docs.count", "store.size"],
        rows,
    ))
}

/// Render `_cat/shards` rows as a table.
pub fn render_shards(value: &Value) -> Result<String, ToolsError> {
    let rows: Vec<ShardPlacement> = serde_json::from_value(value.clone())?;
    let rows = rows
        .into_iter()
        .map(|row| {
            let prirep = if row.is_primary() { "primary" } else { "replica" };
            vec![
                row.index,
                row.shard,
                prirep.to_string(),
                row.state,
                row.docs.unwrap_or_default(),
                row.store.unwrap_or_default(),
                row.ip.unwrap_or_default(),
                row.node.unwrap_or_default(),
            ]
        })
        .collect();
    Ok(render_table(
        &["index", "shard", "prirep", "state", "docs", "store", "ip", "node"],
        rows,
    ))
}

fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(headers.to_vec())];
    for row in &rows {
        lines.push(format_line(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}
