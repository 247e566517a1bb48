//! Indented tree export.
//!
//! Prints the root on the first line and every descendant with box-drawing
//! branch markers, depth-first in pre-order:
//!
//! ```text
//! my-app
//! ├── react
//! │   └── scheduler
//! └── lodash
//! ```

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Tree exporter implementation.
pub struct TreeExporter;

impl Exporter for TreeExporter {
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()> {
        let Some(tree) = &data.tree else {
            return Ok(());
        };

        for node in tree.flatten() {
            writeln!(writer, "{}{}", node.tree_prefix(), node.name)?;
        }

        Ok(())
    }
}
