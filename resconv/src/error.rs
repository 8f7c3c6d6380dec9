//! All error types for the resconv crate.
//!
//! Per-entry parse failures are never errors; they are recorded as
//! [`Diagnostic`](crate::diagnostics::Diagnostic)s instead. Only loading the
//! source and writing the artifacts can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not load contents of xml file at path: {} ({reason})", .path.display())]
    SourceLoad { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid destination: {0}")]
    InvalidDestination(String),
}

impl Error {
    /// Creates a new source load error for `path`.
    pub fn source_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::SourceLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
