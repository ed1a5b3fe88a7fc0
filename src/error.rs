//! Error types for scanning and filesystem operations.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the tree model and the filesystem primitives.
#[derive(Debug, Error)]
pub enum Error {
    /// The scan root does not exist or is not a directory.
    #[error("{}: Not a directory", path.display())]
    NotADirectory {
        /// The path that was requested.
        path: PathBuf,
    },

    /// A file was opened over a path that is not an existing regular file.
    #[error("{}: Not a file", path.display())]
    NotAFile {
        /// The path that was requested.
        path: PathBuf,
    },

    /// A single entry could not be read during traversal.
    ///
    /// Recoverable: the scan skips the entry and keeps going.
    #[error("{}: unreadable entry: {message}", path.display())]
    EntryUnreadable {
        /// Path of the entry, or of the directory whose listing failed.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// A filesystem primitive failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path the operation was applied to.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap an IO error with the path it occurred at.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convert a walkdir failure into a recoverable per-entry error.
    pub(crate) fn unreadable(err: &walkdir::Error, fallback: &Path) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf());
        let message = match err.io_error() {
            Some(io_err) => io_err.to_string(),
            None => err.to_string(),
        };
        Self::EntryUnreadable { path, message }
    }

    /// Whether a scan may continue past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EntryUnreadable { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_directory_message_names_path() {
        let err = Error::NotADirectory {
            path: PathBuf::from("/missing/path"),
        };
        assert_eq!(err.to_string(), "/missing/path: Not a directory");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn io_error_keeps_source() {
        let err = Error::io("/x", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.to_string().contains("gone"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn only_entry_errors_are_recoverable() {
        let err = Error::EntryUnreadable {
            path: PathBuf::from("/x/locked"),
            message: "Permission denied".to_string(),
        };
        assert!(err.is_recoverable());
    }
}
