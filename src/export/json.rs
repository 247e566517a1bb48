//! JSON export implementation.
//!
//! Exports traversal results in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Settings the traversal ran with.
#[derive(Serialize)]
struct JsonSettings {
    /// `None` when the traversal was unbounded
    max_depth: Option<usize>,
    filter: String,
    depth_mode: String,
}

/// Serializable visited node for JSON output.
#[derive(Serialize)]
struct JsonNode {
    name: String,
    depth: usize,
}

/// Serializable edge for JSON output.
#[derive(Serialize)]
struct JsonEdge {
    from: String,
    to: String,
}

/// Serializable cycle info for JSON output.
#[derive(Serialize)]
struct JsonCycle {
    packages: Vec<String>,
    path: String,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    visited: usize,
    edges: usize,
    cycles: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    deepest: Option<usize>,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    root: String,
    root_found: bool,
    root_filtered: bool,
    settings: JsonSettings,
    summary: JsonSummary,
    nodes: Vec<JsonNode>,
    edges: Vec<JsonEdge>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cycles: Vec<JsonCycle>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()> {
        let result = data.result;

        let nodes: Vec<JsonNode> = result
            .visited()
            .iter()
            .map(|n| JsonNode {
                name: n.name.clone(),
                depth: n.depth,
            })
            .collect();

        let edges: Vec<JsonEdge> = result
            .edges()
            .iter()
            .map(|e| JsonEdge {
                from: e.from.clone(),
                to: e.to.clone(),
            })
            .collect();

        let cycles: Vec<JsonCycle> = result
            .cycles()
            .iter()
            .map(|c| JsonCycle {
                packages: c.nodes.clone(),
                path: c.cycle_path(),
            })
            .collect();

        let max_depth = data.config.max_depth();
        let export = JsonExport {
            root: result.root().to_string(),
            root_found: result.root_found(),
            root_filtered: result.root_filtered(),
            settings: JsonSettings {
                max_depth: (max_depth != usize::MAX).then_some(max_depth),
                filter: data.config.filter().to_string(),
                depth_mode: data.config.depth_mode().to_string(),
            },
            summary: JsonSummary {
                visited: nodes.len(),
                edges: edges.len(),
                cycles: cycles.len(),
                deepest: result.deepest(),
            },
            nodes,
            edges,
            cycles,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
