//! Serial physical depth-first traversal for canopy.
//!
//! This crate walks a directory tree and feeds every node, exactly once,
//! to a [`NodeVisitor`]. Key properties:
//!
//! - **Physical traversal**: symbolic links are visited as opaque nodes
//!   and never followed, so a link cycle cannot trap the walk.
//! - **Serial**: nodes arrive one at a time, in sorted depth-first order,
//!   so visitors need no synchronization.
//! - **Fail-fast**: an error from the underlying directory scan aborts
//!   the whole walk; side effects already applied are not rolled back.
//!
//! # Example
//!
//! ```rust,no_run
//! use canopy_walk::{NodeVisitor, Walker};
//! use canopy_core::{Node, TreeError, WalkConfig};
//!
//! struct CountFiles(u64);
//!
//! impl NodeVisitor for CountFiles {
//!     fn visit(&mut self, node: &Node) -> Result<(), TreeError> {
//!         if node.is_file() {
//!             self.0 += 1;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut counter = CountFiles(0);
//! Walker::new(WalkConfig::new("/path/to/tree")).walk(&mut counter).unwrap();
//! println!("{} files", counter.0);
//! ```

mod visitor;
mod walker;

pub use visitor::NodeVisitor;
pub use walker::Walker;

// Re-export core types for convenience
pub use canopy_core::{Node, NodeKind, TreeError, WalkConfig};
