//! Error types for file merging.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a single file could not be read as text.
///
/// These never abort a run: the walker logs them and moves on.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File not found")]
    NotFound,

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Unable to decode file (likely not text)")]
    Decode,

    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound,
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied,
            io::ErrorKind::InvalidData => ReadError::Decode,
            _ => ReadError::Io(err),
        }
    }
}

/// Run-level failures while collecting blocks.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("The specified directory '{}' does not exist.", .0.display())]
    RootNotFound(PathBuf),

    #[error("An error occurred during file merging: {0}")]
    Traversal(#[from] io::Error),
}

/// Failures writing the merged document.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Permission denied to create output file: {}", file_name(.0))]
    PermissionDenied(PathBuf),

    #[error("An error occurred while saving merged content: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OutputError {
    pub fn from_io(path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            OutputError::PermissionDenied(path)
        } else {
            OutputError::Io { path, source: err }
        }
    }
}

/// The bare file name, falling back to the full path.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Failures setting up the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid log directive: {0}")]
    Directive(String),
}
