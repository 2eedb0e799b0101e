//! Traversal node types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind of node observed during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Regular file, with its byte size.
    File { size: u64 },
    /// Directory.
    Directory,
    /// Anything else: symlinks, sockets, devices. Never recursed into.
    Other,
}

impl NodeKind {
    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File { .. })
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }
}

/// A single visited node.
///
/// Produced fresh by the walker for every visit and handed to the active
/// handler; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Absolute path of the node.
    pub path: PathBuf,
    /// What kind of node this is.
    pub kind: NodeKind,
    /// Depth below the traversal root (the root itself is 0).
    pub depth: u32,
}

impl Node {
    /// Create a file node.
    pub fn file(path: impl Into<PathBuf>, size: u64, depth: u32) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::File { size },
            depth,
        }
    }

    /// Create a directory node.
    pub fn directory(path: impl Into<PathBuf>, depth: u32) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::Directory,
            depth,
        }
    }

    /// Create a node for a symlink or other non-file, non-directory entry.
    pub fn other(path: impl Into<PathBuf>, depth: u32) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::Other,
            depth,
        }
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Byte size for file nodes; zero for everything else.
    pub fn size(&self) -> u64 {
        match self.kind {
            NodeKind::File { size } => size,
            _ => 0,
        }
    }
}
