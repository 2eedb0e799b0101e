//! Listing handlers: every path, or files matching an extension.

use std::io::Write;

use canopy_core::{Extension, Node, TreeError};
use canopy_walk::NodeVisitor;

/// Prints the absolute path of every visited node.
pub struct ListAll<'w> {
    out: &'w mut dyn Write,
}

impl<'w> ListAll<'w> {
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self { out }
    }
}

impl NodeVisitor for ListAll<'_> {
    fn visit(&mut self, node: &Node) -> Result<(), TreeError> {
        writeln!(self.out, "{}", node.path.display()).map_err(|e| TreeError::io(&node.path, e))
    }
}

/// Prints the canonical path of files whose name ends in the filter.
///
/// Directories and other node kinds are never matched.
pub struct ListByExtension<'w> {
    ext: Extension,
    out: &'w mut dyn Write,
}

impl<'w> ListByExtension<'w> {
    pub fn new(ext: Extension, out: &'w mut dyn Write) -> Self {
        Self { ext, out }
    }
}

impl NodeVisitor for ListByExtension<'_> {
    fn visit(&mut self, node: &Node) -> Result<(), TreeError> {
        if !node.is_file() || !self.ext.matches(&node.path) {
            return Ok(());
        }
        let path = std::fs::canonicalize(&node.path).unwrap_or_else(|_| node.path.clone());
        writeln!(self.out, "{}", path.display()).map_err(|e| TreeError::io(&node.path, e))
    }
}
