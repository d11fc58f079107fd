//! Error types for tree traversal

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using TreeError.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that abort a traversal. None of these are recovered internally.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("traversal failed: no such file or directory: '{path}'")]
    NotFound { path: PathBuf },

    #[error("traversal failed: not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    #[error("traversal failed: permission denied: '{path}'")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("traversal failed at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound { path },
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied { path, source },
            _ => TreeError::Io { path, source },
        }
    }

    /// The path the failure occurred at.
    pub fn path(&self) -> &Path {
        match self {
            TreeError::NotFound { path }
            | TreeError::NotADirectory { path }
            | TreeError::PermissionDenied { path, .. }
            | TreeError::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_kinds() {
        let path = Path::new("some/dir");

        let err = TreeError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, TreeError::NotFound { .. }));

        let err = TreeError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, TreeError::PermissionDenied { .. }));

        let err = TreeError::from_io(path, io::Error::other("disk on fire"));
        assert!(matches!(err, TreeError::Io { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn test_display_names_path() {
        let err = TreeError::NotADirectory {
            path: PathBuf::from("notes.txt"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("traversal failed"));
        assert!(msg.contains("notes.txt"));
    }

    #[test]
    fn test_io_source_is_preserved() {
        use std::error::Error as _;

        let err = TreeError::from_io(
            Path::new("locked"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(err.source().is_some());
    }
}
