//! Error types for tree operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run: validation failures before the walk and
/// fatal traversal-level failures during it.
///
/// Per-node failures (a single copy, move, or delete going wrong) are
/// deliberately not represented here; they are recorded and reported
/// without stopping the walk.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The directory-scan primitive itself failed.
    #[error("Traversal failed: {message}")]
    Walk { message: String },

    /// A path could not be expressed relative to the expected root.
    #[error("No relative path: {path} is not under {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl TreeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
