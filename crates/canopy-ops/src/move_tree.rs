//! Tree-mirroring move handler.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use canopy_core::{Node, NodeKind, TreeError};
use canopy_walk::NodeVisitor;

use crate::mkdirs::ensure_dir;
use crate::relpath::rebase;
use crate::report::NodeError;
use crate::stream::copy_file;

/// Mirrors every visited node under a destination root and deletes the
/// sources that made it across.
///
/// Each file is copied and, only on success, unlinked; a failed copy
/// leaves the source intact and is recorded. Visited source directories
/// are remembered so the executor can prune the emptied skeleton after
/// the walk. The source root itself is never materialized as a
/// destination of itself.
pub struct MoveTree {
    src_root: PathBuf,
    dest_root: PathBuf,
    visited_dirs: Vec<PathBuf>,
    errors: Vec<NodeError>,
}

impl MoveTree {
    pub fn new(src_root: PathBuf, dest_root: PathBuf) -> Self {
        Self {
            src_root,
            dest_root,
            visited_dirs: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Recorded failures and the source directories seen, in visit
    /// order, the root excluded.
    pub fn into_parts(self) -> (Vec<NodeError>, Vec<PathBuf>) {
        (self.errors, self.visited_dirs)
    }

    fn move_one(&mut self, node: &Node) {
        let Ok(dest) = rebase(&node.path, &self.src_root, &self.dest_root) else {
            return;
        };

        if let Some(parent) = dest.parent() {
            if let Err(err) = ensure_dir(parent) {
                self.fail(
                    &node.path,
                    format!("cannot create {}: {err}", parent.display()),
                );
                return;
            }
        }
        if let Err(err) = copy_file(&node.path, &dest) {
            self.fail(&node.path, format!("move failed: {err}"));
            return;
        }
        if let Err(err) = fs::remove_file(&node.path) {
            self.fail(&node.path, format!("moved but could not remove source: {err}"));
        }
    }

    fn fail(&mut self, path: &Path, message: String) {
        warn!(path = %path.display(), "{message}");
        self.errors.push(NodeError::new(path, message));
    }
}

impl NodeVisitor for MoveTree {
    fn visit(&mut self, node: &Node) -> Result<(), TreeError> {
        match node.kind {
            NodeKind::File { .. } => self.move_one(node),
            NodeKind::Directory => {
                if node.path == self.src_root {
                    return Ok(());
                }
                self.visited_dirs.push(node.path.clone());
                let Ok(dest) = rebase(&node.path, &self.src_root, &self.dest_root) else {
                    return Ok(());
                };
                if let Err(err) = ensure_dir(&dest) {
                    self.fail(&node.path, format!("cannot create {}: {err}", dest.display()));
                }
            }
            NodeKind::Other => {}
        }
        Ok(())
    }
}
