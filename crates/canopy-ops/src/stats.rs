//! Aggregate counters observed during a walk.

use serde::{Deserialize, Serialize};

use canopy_core::{Node, NodeKind, TreeError};
use canopy_walk::NodeVisitor;

/// Running totals for a single walk.
///
/// Owned by the counting handler and mutated only from the traversal
/// thread; every field is monotonically non-decreasing during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Regular files seen.
    pub files: u64,
    /// Directories seen, the traversal root included.
    pub dirs: u64,
    /// Cumulative byte size of regular files.
    pub bytes: u64,
}

impl Totals {
    /// Create zeroed totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one visited node.
    pub fn record(&mut self, node: &Node) {
        match node.kind {
            NodeKind::File { size } => {
                self.files += 1;
                self.bytes += size;
            }
            NodeKind::Directory => self.dirs += 1,
            NodeKind::Other => {}
        }
    }
}

impl NodeVisitor for Totals {
    fn visit(&mut self, node: &Node) -> Result<(), TreeError> {
        self.record(node);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_by_kind() {
        let mut totals = Totals::new();
        totals.record(&Node::directory("/src", 0));
        totals.record(&Node::file("/src/a.txt", 10, 1));
        totals.record(&Node::directory("/src/sub", 1));
        totals.record(&Node::file("/src/sub/b.log", 5, 2));
        totals.record(&Node::other("/src/link", 1));

        assert_eq!(totals.files, 2);
        assert_eq!(totals.dirs, 2);
        assert_eq!(totals.bytes, 15);
    }

    #[test]
    fn test_other_nodes_do_not_count() {
        let mut totals = Totals::new();
        totals.record(&Node::other("/src/sock", 1));
        assert_eq!(totals, Totals::new());
    }
}
