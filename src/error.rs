//! Error types for the sheetread library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::backend::Backend;

/// Result type alias for sheetread operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or reading a workbook.
#[derive(Error, Debug)]
pub enum Error {
    /// The path extension is neither `.xls` nor `.xlsx`.
    #[error("Received file path with unexpected extension {extension}")]
    UnsupportedExtension {
        /// Path that was rejected.
        path: PathBuf,
        /// Extension as it appeared in the path, with its leading dot.
        extension: String,
    },

    /// The file does not carry the container signature its extension implies.
    #[error("File '{}' is not a valid {backend} container", .path.display())]
    MalformedContainer {
        /// Path that was opened.
        path: PathBuf,
        /// Backend the extension selected.
        backend: Backend,
    },

    /// Any other backend failure, wrapped with the path that failed.
    #[error("Unable to read the file '{}'; {message}", .path.display())]
    UnreadableFile {
        /// Path that was opened.
        path: PathBuf,
        /// Message of the underlying failure.
        message: String,
    },

    /// The workbook declares no worksheets.
    #[error("Workbook '{}' contains no worksheets", .path.display())]
    NoWorksheets {
        /// Path of the workbook.
        path: PathBuf,
    },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing tables.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl Error {
    /// Wrap a backend failure as [`Error::UnreadableFile`].
    pub(crate) fn unreadable(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        Error::UnreadableFile {
            path: path.into(),
            message: cause.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
