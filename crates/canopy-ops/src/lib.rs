//! Action handlers and shared file primitives for canopy.
//!
//! One serial walk drives exactly one handler: list every path, list
//! files by extension, count files or directories, sum file sizes,
//! mirror a tree (copy or move), or delete files by extension. The
//! copy and move handlers share the path-rebasing, directory
//! materialization, and chunked stream-copy primitives in this crate.
//!
//! Per-node failures never abort a run; they are logged with the
//! offending path and collected into the run [`Outcome`]. Only
//! traversal-level errors are fatal.

mod copy_tree;
mod delete;
mod executor;
mod list;
mod mkdirs;
mod move_tree;
mod relpath;
mod report;
mod stats;
mod stream;

pub use copy_tree::CopyTree;
pub use delete::DeleteByExtension;
pub use executor::{Task, TreeOp, execute, execute_with_output};
pub use list::{ListAll, ListByExtension};
pub use mkdirs::ensure_dir;
pub use move_tree::MoveTree;
pub use relpath::rebase;
pub use report::{NodeError, Outcome, Summary};
pub use stats::Totals;
pub use stream::{CHUNK_SIZE, copy_file};
