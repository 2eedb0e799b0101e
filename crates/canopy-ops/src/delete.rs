//! Extension-filtered deletion handler.

use std::fs;
use std::path::Path;

use tracing::warn;

use canopy_core::{Extension, Node, TreeError};
use canopy_walk::NodeVisitor;

use crate::report::NodeError;

/// Deletes every regular file whose name ends in the filter.
///
/// Directories and other node kinds are left untouched. A failed
/// deletion is recorded and the walk moves on.
pub struct DeleteByExtension {
    ext: Extension,
    errors: Vec<NodeError>,
}

impl DeleteByExtension {
    pub fn new(ext: Extension) -> Self {
        Self {
            ext,
            errors: Vec::new(),
        }
    }

    /// Per-node failures recorded during the walk.
    pub fn into_errors(self) -> Vec<NodeError> {
        self.errors
    }

    fn fail(&mut self, path: &Path, message: String) {
        warn!(path = %path.display(), "{message}");
        self.errors.push(NodeError::new(path, message));
    }
}

impl NodeVisitor for DeleteByExtension {
    fn visit(&mut self, node: &Node) -> Result<(), TreeError> {
        if !node.is_file() || !self.ext.matches(&node.path) {
            return Ok(());
        }
        if let Err(err) = fs::remove_file(&node.path) {
            self.fail(&node.path, format!("delete failed: {err}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_only_matching_files_deleted() {
        let temp = TempDir::new().unwrap();
        let keep = temp.path().join("a.txt");
        let drop = temp.path().join("b.log");
        fs::write(&keep, "keep").unwrap();
        fs::write(&drop, "drop").unwrap();

        let mut handler = DeleteByExtension::new(Extension::parse(".log").unwrap());
        handler.visit(&Node::file(&keep, 4, 1)).unwrap();
        handler.visit(&Node::file(&drop, 4, 1)).unwrap();

        assert!(keep.exists());
        assert!(!drop.exists());
        assert!(handler.into_errors().is_empty());
    }

    #[test]
    fn test_missing_file_is_recorded_not_fatal() {
        let temp = TempDir::new().unwrap();
        let ghost = temp.path().join("ghost.log");

        let mut handler = DeleteByExtension::new(Extension::parse(".log").unwrap());
        handler.visit(&Node::file(&ghost, 0, 1)).unwrap();

        let errors = handler.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, ghost);
    }
}
