//! Output formats for traversal results.
//!
//! This module provides exporters that render one traversal as an indented
//! tree, a flat edge list, or JSON.

pub mod edges;
pub mod json;
pub mod tree;

use crate::config::TraversalConfig;
use crate::graph::TraversalResult;
use crate::tree::RootedTree;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Indented ASCII tree
    #[default]
    Tree,
    /// One `from -> to` line per edge
    Edges,
    /// JSON format - machine-readable, full data
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tree" => Ok(ExportFormat::Tree),
            "edges" | "diagram" => Ok(ExportFormat::Edges),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: tree, edges, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Tree => write!(f, "tree"),
            ExportFormat::Edges => write!(f, "edges"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Data container for export operations.
///
/// Holds one traversal and the tree derived from it, so every format
/// renders the same policy decisions.
#[derive(Debug, Clone)]
pub struct ExportData<'a> {
    /// Settings the traversal ran with
    pub config: &'a TraversalConfig,
    /// The traversal itself
    pub result: &'a TraversalResult,
    /// Tree view, absent when nothing was visited
    pub tree: Option<RootedTree>,
}

impl<'a> ExportData<'a> {
    /// Create export data from a traversal.
    pub fn new(config: &'a TraversalConfig, result: &'a TraversalResult) -> Self {
        Self {
            config,
            result,
            tree: RootedTree::from_traversal(result),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData<'_>,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Tree => tree::TreeExporter.export(data, writer),
        ExportFormat::Edges => edges::EdgeListExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData<'_>) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
