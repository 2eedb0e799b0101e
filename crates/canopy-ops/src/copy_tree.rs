//! Tree-mirroring copy handler.

use std::path::{Path, PathBuf};

use tracing::warn;

use canopy_core::{Extension, Node, NodeKind, TreeError};
use canopy_walk::NodeVisitor;

use crate::mkdirs::ensure_dir;
use crate::relpath::rebase;
use crate::report::NodeError;
use crate::stream::copy_file;

/// Mirrors every visited node under a destination root.
///
/// Directories are materialized even when empty; files are stream-copied
/// next to their mirrored parents. Files whose name ends in the optional
/// exclude extension are skipped. A failed copy is recorded and the walk
/// moves on.
pub struct CopyTree {
    src_root: PathBuf,
    dest_root: PathBuf,
    exclude: Option<Extension>,
    errors: Vec<NodeError>,
}

impl CopyTree {
    pub fn new(src_root: PathBuf, dest_root: PathBuf, exclude: Option<Extension>) -> Self {
        Self {
            src_root,
            dest_root,
            exclude,
            errors: Vec::new(),
        }
    }

    /// Per-node failures recorded during the walk.
    pub fn into_errors(self) -> Vec<NodeError> {
        self.errors
    }

    fn copy_one(&mut self, node: &Node) {
        // the walker only hands out paths under the validated source
        // root, so a resolver miss is skipped rather than escalated
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
            self.fail(&node.path, format!("copy failed: {err}"));
        }
    }

    fn mirror_dir(&mut self, node: &Node) {
        let Ok(dest) = rebase(&node.path, &self.src_root, &self.dest_root) else {
            return;
        };
        if let Err(err) = ensure_dir(&dest) {
            self.fail(&node.path, format!("cannot create {}: {err}", dest.display()));
        }
    }

    fn fail(&mut self, path: &Path, message: String) {
        warn!(path = %path.display(), "{message}");
        self.errors.push(NodeError::new(path, message));
    }
}

impl NodeVisitor for CopyTree {
    fn visit(&mut self, node: &Node) -> Result<(), TreeError> {
        match node.kind {
            NodeKind::File { .. } => {
                if self.exclude.as_ref().is_some_and(|e| e.matches(&node.path)) {
                    return Ok(());
                }
                self.copy_one(node);
            }
            NodeKind::Directory => self.mirror_dir(node),
            NodeKind::Other => {}
        }
        Ok(())
    }
}
