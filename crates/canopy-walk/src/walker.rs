//! jwalk-based serial directory walker.

use std::path::Path;

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, warn};

use canopy_core::{Node, NodeKind, TreeError, WalkConfig};

use crate::visitor::NodeVisitor;

/// Depth-first traversal of a physical directory tree.
///
/// Every file, directory, and other node under the root is visited
/// exactly once, the root itself included. The iterator holds one open
/// directory handle per ancestor of the current node, so resource usage
/// is bounded by tree depth.
pub struct Walker {
    config: WalkConfig,
}

impl Walker {
    /// Create a walker for the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Walk the tree, feeding every node to `visitor`.
    ///
    /// Returns the first traversal-level error encountered; the visitor's
    /// side effects up to that point remain in place.
    pub fn walk(&self, visitor: &mut dyn NodeVisitor) -> Result<(), TreeError> {
        let root = &self.config.root;
        if !root.is_dir() {
            return Err(TreeError::NotADirectory { path: root.clone() });
        }

        debug!(root = %root.display(), "starting walk");

        let max_depth = self
            .config
            .max_depth
            .map(|d| d as usize)
            .unwrap_or(usize::MAX);

        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .sort(self.config.sort)
            .skip_hidden(!self.config.include_hidden)
            .follow_links(false)
            .min_depth(0)
            .max_depth(max_depth);

        let mut visited = 0u64;
        for entry_result in walker {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(err) => return Err(scan_error(err)),
            };
            let node = to_node(&entry);
            visitor.visit(&node)?;
            visited += 1;
        }

        debug!(root = %root.display(), visited, "walk finished");
        Ok(())
    }
}

/// Convert a directory entry into a traversal node.
fn to_node(entry: &jwalk::DirEntry<((), ())>) -> Node {
    let path = entry.path();
    let depth = entry.depth() as u32;
    let file_type = entry.file_type();

    if file_type.is_dir() {
        Node::directory(path, depth)
    } else if file_type.is_file() {
        match entry.metadata() {
            Ok(metadata) => Node::file(path, metadata.len(), depth),
            Err(err) => {
                // a file deleted or locked mid-walk is still a node; it
                // just has no size and matches no per-file action
                warn!(path = %path.display(), "metadata unavailable: {err}");
                Node::other(path, depth)
            }
        }
    } else {
        // symlinks, sockets, devices: visited, never recursed into
        Node::other(path, depth)
    }
}

fn scan_error(err: jwalk::Error) -> TreeError {
    let message = err.to_string();
    let path = err.path().map(Path::to_path_buf);
    match (path, err.into_io_error()) {
        (Some(path), Some(io)) => TreeError::io(path, io),
        _ => TreeError::Walk { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Records every visited node in order.
    struct Collector {
        nodes: Vec<Node>,
    }

    impl Collector {
        fn new() -> Self {
            Self { nodes: Vec::new() }
        }

        fn paths(&self) -> Vec<PathBuf> {
            self.nodes.iter().map(|n| n.path.clone()).collect()
        }
    }

    impl NodeVisitor for Collector {
        fn visit(&mut self, node: &Node) -> Result<(), TreeError> {
            self.nodes.push(node.clone());
            Ok(())
        }
    }

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir2")).unwrap();
        fs::write(root.join("a.txt"), "hello").unwrap();
        fs::write(root.join("dir1/b.log"), "12345").unwrap();
        fs::write(root.join("dir2/c.txt"), "world!").unwrap();

        temp
    }

    #[test]
    fn test_every_node_visited_once() {
        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();

        let mut collector = Collector::new();
        Walker::new(WalkConfig::new(&root))
            .walk(&mut collector)
            .unwrap();

        // root + 2 dirs + 3 files
        assert_eq!(collector.nodes.len(), 6);

        let mut paths = collector.paths();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 6);
    }

    #[test]
    fn test_root_is_visited_as_directory() {
        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();

        let mut collector = Collector::new();
        Walker::new(WalkConfig::new(&root))
            .walk(&mut collector)
            .unwrap();

        let first = &collector.nodes[0];
        assert_eq!(first.path, root);
        assert!(first.is_dir());
        assert_eq!(first.depth, 0);
    }

    #[test]
    fn test_sorted_depth_first_order() {
        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();

        let mut collector = Collector::new();
        Walker::new(WalkConfig::new(&root))
            .walk(&mut collector)
            .unwrap();

        let expected = vec![
            root.clone(),
            root.join("a.txt"),
            root.join("dir1"),
            root.join("dir1/b.log"),
            root.join("dir2"),
            root.join("dir2/c.txt"),
        ];
        assert_eq!(collector.paths(), expected);
    }

    #[test]
    fn test_file_sizes_reported() {
        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();

        let mut collector = Collector::new();
        Walker::new(WalkConfig::new(&root))
            .walk(&mut collector)
            .unwrap();

        let total: u64 = collector.nodes.iter().map(Node::size).sum();
        assert_eq!(total, 5 + 5 + 6);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_visited_as_other_and_not_followed() {
        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();
        std::os::unix::fs::symlink(root.join("dir1"), root.join("loop")).unwrap();

        let mut collector = Collector::new();
        Walker::new(WalkConfig::new(&root))
            .walk(&mut collector)
            .unwrap();

        let link = collector
            .nodes
            .iter()
            .find(|n| n.path == root.join("loop"))
            .expect("symlink should be visited");
        assert_eq!(link.kind, NodeKind::Other);

        // the target's contents must not appear under the link path
        assert!(
            !collector
                .paths()
                .iter()
                .any(|p| p.starts_with(root.join("loop")) && *p != root.join("loop"))
        );
    }

    #[test]
    fn test_max_depth_limits_walk() {
        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();

        let config = WalkConfig::builder()
            .root(&root)
            .max_depth(Some(1u32))
            .build()
            .unwrap();

        let mut collector = Collector::new();
        Walker::new(config).walk(&mut collector).unwrap();

        // root + its direct children only
        assert_eq!(collector.nodes.len(), 4);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_aborts_walk() {
        use std::os::unix::fs::PermissionsExt;

        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();
        let locked = root.join("dir1");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // running privileged (e.g. as root) the scan cannot be denied
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut collector = Collector::new();
        let result = Walker::new(WalkConfig::new(&root)).walk(&mut collector);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(
            result.unwrap_err(),
            TreeError::PermissionDenied { .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_unstatable_file_degrades_to_other() {
        use std::os::unix::fs::PermissionsExt;

        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();
        // readable but not searchable: names list, stat of children fails
        let opaque = root.join("dir1");
        fs::set_permissions(&opaque, fs::Permissions::from_mode(0o600)).unwrap();

        if fs::metadata(opaque.join("b.log")).is_ok() {
            fs::set_permissions(&opaque, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut collector = Collector::new();
        let result = Walker::new(WalkConfig::new(&root)).walk(&mut collector);
        fs::set_permissions(&opaque, fs::Permissions::from_mode(0o755)).unwrap();

        result.unwrap();
        let node = collector
            .nodes
            .iter()
            .find(|n| n.path == opaque.join("b.log"))
            .expect("entry should still be visited");
        assert_eq!(node.kind, NodeKind::Other);
    }

    #[test]
    fn test_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nope");

        let mut collector = Collector::new();
        let err = Walker::new(WalkConfig::new(&root))
            .walk(&mut collector)
            .unwrap_err();
        assert!(matches!(err, TreeError::NotADirectory { .. }));
    }

    #[test]
    fn test_hidden_entries_visited_by_default() {
        let temp = create_test_tree();
        let root = temp.path().canonicalize().unwrap();
        fs::write(root.join(".hidden"), "x").unwrap();

        let mut collector = Collector::new();
        Walker::new(WalkConfig::new(&root))
            .walk(&mut collector)
            .unwrap();

        assert!(collector.paths().contains(&root.join(".hidden")));
    }
}
