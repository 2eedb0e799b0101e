//! Wires a task to a walk and collects the outcome.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use canopy_core::{Extension, TreeError, WalkConfig};
use canopy_walk::{NodeVisitor, Walker};

use crate::copy_tree::CopyTree;
use crate::delete::DeleteByExtension;
use crate::list::{ListAll, ListByExtension};
use crate::mkdirs::ensure_dir;
use crate::move_tree::MoveTree;
use crate::report::{Outcome, Summary};
use crate::stats::Totals;

/// The selected operation, each variant carrying exactly the
/// configuration it needs.
///
/// The exclude filter of [`TreeOp::CopyTree`] and the include filters of
/// the listing and deletion variants are deliberately separate fields:
/// one skips matches, the others select them.
#[derive(Debug, Clone)]
pub enum TreeOp {
    /// Print every path under the root.
    List,
    /// Print files whose name ends in the extension.
    ListByExtension { ext: Extension },
    /// Count regular files.
    CountFiles,
    /// Count directories.
    CountDirectories,
    /// Sum the byte sizes of regular files.
    TotalSize,
    /// Mirror the tree under `dest`, optionally skipping one extension.
    CopyTree {
        dest: PathBuf,
        exclude: Option<Extension>,
    },
    /// Mirror the tree under `dest`, delete the sources, then try to
    /// remove the emptied source tree.
    MoveTree { dest: PathBuf },
    /// Delete every file whose name ends in the extension.
    DeleteByExtension { ext: Extension },
}

/// One full run: a root directory and the operation to apply to it.
#[derive(Debug, Clone)]
pub struct Task {
    /// The directory the traversal starts from.
    pub root: PathBuf,
    /// The operation to perform.
    pub op: TreeOp,
}

impl Task {
    pub fn new(root: impl Into<PathBuf>, op: TreeOp) -> Self {
        Self {
            root: root.into(),
            op,
        }
    }
}

/// Execute a task, writing per-node output to stdout.
pub fn execute(task: &Task) -> Result<Outcome, TreeError> {
    let mut stdout = io::stdout().lock();
    execute_with_output(task, &mut stdout)
}

/// Execute a task, writing per-node output (the listing actions) to
/// `out`.
///
/// The root is canonicalized and validated before anything else; for
/// copy and move the destination root is materialized before the walk
/// begins, so an empty source still yields an empty mirror.
pub fn execute_with_output(task: &Task, out: &mut dyn Write) -> Result<Outcome, TreeError> {
    let root = task
        .root
        .canonicalize()
        .map_err(|e| TreeError::io(&task.root, e))?;
    if !root.is_dir() {
        return Err(TreeError::NotADirectory { path: root });
    }

    if let TreeOp::CopyTree { dest, .. } | TreeOp::MoveTree { dest } = &task.op {
        ensure_dir(dest).map_err(|e| TreeError::io(dest, e))?;
    }

    debug!(root = %root.display(), op = ?task.op, "executing");

    match &task.op {
        TreeOp::List => {
            run(&root, ListAll::new(out))?;
            Ok(Outcome::default())
        }
        TreeOp::ListByExtension { ext } => {
            run(&root, ListByExtension::new(ext.clone(), out))?;
            Ok(Outcome::default())
        }
        TreeOp::CountFiles => {
            let totals = run(&root, Totals::new())?;
            Ok(Outcome::with_summary(Summary::Files(totals.files)))
        }
        TreeOp::CountDirectories => {
            let totals = run(&root, Totals::new())?;
            Ok(Outcome::with_summary(Summary::Directories(totals.dirs)))
        }
        TreeOp::TotalSize => {
            let totals = run(&root, Totals::new())?;
            Ok(Outcome::with_summary(Summary::Bytes(totals.bytes)))
        }
        TreeOp::CopyTree { dest, exclude } => {
            let handler = run(
                &root,
                CopyTree::new(root.clone(), dest.clone(), exclude.clone()),
            )?;
            Ok(Outcome::with_errors(handler.into_errors()))
        }
        TreeOp::MoveTree { dest } => {
            let handler = run(&root, MoveTree::new(root.clone(), dest.clone()))?;
            let (errors, dirs) = handler.into_parts();
            let mut outcome = Outcome::with_errors(errors);
            prune_source(&root, &dirs, &mut outcome);
            Ok(outcome)
        }
        TreeOp::DeleteByExtension { ext } => {
            let handler = run(&root, DeleteByExtension::new(ext.clone()))?;
            Ok(Outcome::with_errors(handler.into_errors()))
        }
    }
}

fn run<V: NodeVisitor>(root: &Path, mut visitor: V) -> Result<V, TreeError> {
    Walker::new(WalkConfig::new(root)).walk(&mut visitor)?;
    Ok(visitor)
}

/// Remove the emptied source skeleton after a move, deepest first, then
/// the root itself. A non-empty directory is an expected leftover when
/// some files could not be moved, so failure is a warning, not an error.
fn prune_source(root: &Path, dirs: &[PathBuf], outcome: &mut Outcome) {
    for dir in dirs.iter().rev() {
        if let Err(err) = fs::remove_dir(dir) {
            debug!(path = %dir.display(), "source directory left in place: {err}");
        }
    }
    if let Err(err) = fs::remove_dir(root) {
        let message = format!(
            "could not remove source root {}: {err} (directory may not be empty)",
            root.display()
        );
        warn!("{message}");
        outcome.warnings.push(message);
    }
}
