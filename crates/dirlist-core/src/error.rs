//! Error and warning types for listing operations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while listing.
///
/// Only [`ListError::Output`] aborts a listing. The path-carrying variants
/// describe a single failed read and end up as a [`ListWarning`].
#[derive(Debug, Error)]
pub enum ListError {
    /// Permission denied for a path.
    #[error("{path}: permission denied")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("{path}: no such file or directory")]
    NotFound { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("{path}: not a directory")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the listing itself failed.
    #[error("failed to write listing: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }
}

impl From<std::io::Error> for ListError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

/// Kind of listing warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A directory could not be opened or read.
    ReadError,
    /// An entry's metadata could not be retrieved.
    MetadataError,
}

impl WarningKind {
    /// Prefix printed in front of the warning message.
    pub fn label(self) -> &'static str {
        match self {
            Self::ReadError => "Error reading directory",
            Self::MetadataError => "Error getting file info",
        }
    }
}

/// Non-fatal failure encountered during a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ListWarning {
    /// Create a warning for a directory that could not be read.
    pub fn read_error(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: ListError::io(&path, error).to_string(),
            path,
            kind: WarningKind::ReadError,
        }
    }

    /// Create a warning for an entry whose metadata could not be read.
    pub fn metadata_error(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: ListError::io(&path, error).to_string(),
            path,
            kind: WarningKind::MetadataError,
        }
    }
}

impl fmt::Display for ListWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}
