//! Extension filters.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::TreeError;

/// A file-extension filter such as `.txt`.
///
/// Matching is an exact comparison against the substring from the last
/// `.` of the file name to its end, dot included. A name with no `.`
/// matches nothing. Filters apply only to regular files; directories and
/// other node kinds are never matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension(String);

impl Extension {
    /// Parse a filter from user input.
    ///
    /// A missing leading dot is normalized by prepending one, so both
    /// `.log` and `log` denote the same filter.
    pub fn parse(raw: &str) -> Result<Self, TreeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "." {
            return Err(TreeError::invalid_config(format!(
                "extension filter {raw:?} has no suffix"
            )));
        }
        let filter = if trimmed.starts_with('.') {
            trimmed.to_string()
        } else {
            format!(".{trimmed}")
        };
        Ok(Self(filter))
    }

    /// The filter string, leading dot included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the file name of `path` ends in this extension.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        match name.rfind('.') {
            Some(dot) => name[dot..] == self.0,
            None => false,
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_missing_dot() {
        assert_eq!(Extension::parse("txt").unwrap().as_str(), ".txt");
        assert_eq!(Extension::parse(".txt").unwrap().as_str(), ".txt");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(Extension::parse("").is_err());
        assert!(Extension::parse(".").is_err());
        assert!(Extension::parse("  ").is_err());
    }

    #[test]
    fn test_match_is_exact_on_last_suffix() {
        let ext = Extension::parse(".txt").unwrap();
        assert!(ext.matches(Path::new("/src/a.txt")));
        assert!(ext.matches(Path::new("/src/archive.tar.txt")));
        assert!(!ext.matches(Path::new("/src/a.txt.bak")));
        assert!(!ext.matches(Path::new("/src/a.TXT")));
    }

    #[test]
    fn test_dotless_name_never_matches() {
        let ext = Extension::parse(".txt").unwrap();
        assert!(!ext.matches(Path::new("/src/Makefile")));
        assert!(!ext.matches(Path::new("/src/txt")));
    }

    #[test]
    fn test_dot_in_directory_does_not_count() {
        // only the file name is inspected, not the full path
        let ext = Extension::parse(".d").unwrap();
        assert!(!ext.matches(Path::new("/src/pkg.d/notes")));
        assert!(ext.matches(Path::new("/src/pkg.d/unit.d")));
    }

    #[test]
    fn test_hidden_file_suffix() {
        let ext = Extension::parse(".gitignore").unwrap();
        assert!(ext.matches(Path::new("/repo/.gitignore")));
    }
}
