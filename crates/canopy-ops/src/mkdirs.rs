//! Idempotent directory materialization.

use std::fs;
use std::io;
use std::path::Path;

/// Create `path` and every missing ancestor, in order from the root
/// downward.
///
/// A component that already exists as a directory is tolerated; any
/// other failure (permission denied, a non-directory squatting on the
/// path) is surfaced to the caller.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    let mut ancestors: Vec<&Path> = path.ancestors().collect();
    ancestors.reverse();

    for ancestor in ancestors {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        match fs::create_dir(ancestor) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists && ancestor.is_dir() => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_ancestors() {
        let temp = TempDir::new().unwrap();
        let deep = temp.path().join("a/b/c/d");

        ensure_dir(&deep).unwrap();
        assert!(deep.is_dir());
    }

    #[test]
    fn test_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b");

        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_existing_chain_tolerated() {
        let temp = TempDir::new().unwrap();
        ensure_dir(temp.path()).unwrap();
    }

    #[test]
    fn test_file_in_the_way_is_surfaced() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "x").unwrap();

        assert!(ensure_dir(&file.join("child")).is_err());
        assert!(ensure_dir(&file).is_err());
    }
}
