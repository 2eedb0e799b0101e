//! The visitor seam between the walker and the action handlers.

use canopy_core::{Node, TreeError};

/// Per-node callback driven by the walker.
///
/// The walker calls [`visit`](NodeVisitor::visit) once for every node in
/// the tree, in depth-first order. Implementations record recoverable
/// per-node failures internally and return `Err` only for conditions
/// that must abort the whole walk.
pub trait NodeVisitor {
    fn visit(&mut self, node: &Node) -> Result<(), TreeError>;
}
