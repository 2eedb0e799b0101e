//! Core types for canopy.
//!
//! This crate provides the fundamental data structures shared by the
//! walker and the operation handlers: traversal nodes, extension
//! filters, walk configuration, and error types.

mod config;
mod error;
mod ext;
mod node;

pub use config::{WalkConfig, WalkConfigBuilder};
pub use error::TreeError;
pub use ext::Extension;
pub use node::{Node, NodeKind};
