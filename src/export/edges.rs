//! Edge-list export.
//!
//! One `from -> to` line per recorded edge, in discovery order. An empty
//! edge list is rendered as a single comment line.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Written in place of edges when none were recorded.
pub const EMPTY_EDGES_COMMENT: &str = "# no dependency edges";

/// Edge-list exporter implementation.
pub struct EdgeListExporter;

impl Exporter for EdgeListExporter {
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()> {
        let edges = data.result.edges();
        if edges.is_empty() {
            writeln!(writer, "{}", EMPTY_EDGES_COMMENT)?;
            return Ok(());
        }

        for edge in edges {
            writeln!(writer, "{}", edge)?;
        }

        Ok(())
    }
}
