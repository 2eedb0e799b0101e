//! Run outcome and per-node error reporting.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A recoverable failure on a single node. The walk continues past it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeError {
    /// The path that caused the error.
    pub path: PathBuf,
    /// A human-readable error message.
    pub message: String,
}

impl NodeError {
    /// Create a new per-node error.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Summary produced by the counting actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Summary {
    /// Total number of regular files seen.
    Files(u64),
    /// Total number of directories seen, the traversal root included.
    Directories(u64),
    /// Cumulative byte size of regular files.
    Bytes(u64),
}

/// What a completed run produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outcome {
    /// Summary for the counting actions; `None` for the others.
    pub summary: Option<Summary>,
    /// Per-node failures, in visit order.
    pub errors: Vec<NodeError>,
    /// Best-effort cleanup warnings (source-root removal after a move).
    pub warnings: Vec<String>,
}

impl Outcome {
    /// Outcome of a counting action.
    pub fn with_summary(summary: Summary) -> Self {
        Self {
            summary: Some(summary),
            ..Self::default()
        }
    }

    /// Outcome of a side-effecting action.
    pub fn with_errors(errors: Vec<NodeError>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// Whether every per-node operation succeeded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
