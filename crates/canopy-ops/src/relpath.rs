//! Re-rooting node paths under a destination.

use std::path::{Path, PathBuf};

use canopy_core::TreeError;

/// Compute the destination path for `path` by stripping the `src_root`
/// prefix and reattaching the remainder under `dest_root`.
///
/// Only a path-segment-aligned prefix counts as "under the root":
/// `/a/bb/file` is not under `/a/b` even though it shares a textual
/// prefix. The source root itself rebases to `dest_root` exactly.
pub fn rebase(path: &Path, src_root: &Path, dest_root: &Path) -> Result<PathBuf, TreeError> {
    let relative = path
        .strip_prefix(src_root)
        .map_err(|_| TreeError::OutsideRoot {
            path: path.to_path_buf(),
            root: src_root.to_path_buf(),
        })?;
    Ok(dest_root.join(relative))
}
