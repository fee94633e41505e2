//! Typed error types for the session boundary.
//!
//! Every failure raised by a collaborator (document format, directory lister)
//! is classified into one [`SessionError`] variant before it reaches the log
//! view. A cancelled dialog is not an error and never appears here.

use std::path::PathBuf;
use thiserror::Error;

/// Classification attached to error lines in the log view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Directory-relative open requested with no active folder.
    MissingContext,
    /// Loader or processor failed while opening an existing document.
    OpenFailed,
    /// Writer failed while materializing a new document.
    CreateFailed,
    /// Directory enumeration failed.
    Io,
}

impl ErrorKind {
    /// Stable name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingContext => "MissingContext",
            ErrorKind::OpenFailed => "OpenFailed",
            ErrorKind::CreateFailed => "CreateFailed",
            ErrorKind::Io => "IOError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A directory-relative open was requested before any folder was opened.
    #[error("Cannot open '{name}': no folder is open, give the full path")]
    MissingContext {
        /// Name the caller asked to open.
        name: String,
    },

    /// The document could not be loaded or processed.
    #[error("Not able to open '{name}': {source:#}")]
    OpenFailed {
        /// Name or path the caller asked to open.
        name: String,
        /// Underlying collaborator error.
        #[source]
        source: anyhow::Error,
    },

    /// The new document could not be written.
    #[error("Not able to create '{}': {source:#}", path.display())]
    CreateFailed {
        /// Target path chosen in the save dialog.
        path: PathBuf,
        /// Underlying collaborator error.
        #[source]
        source: anyhow::Error,
    },

    /// The directory could not be enumerated.
    #[error("Not able to read folder '{}': {source}", path.display())]
    Io {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::MissingContext { .. } => ErrorKind::MissingContext,
            SessionError::OpenFailed { .. } => ErrorKind::OpenFailed,
            SessionError::CreateFailed { .. } => ErrorKind::CreateFailed,
            SessionError::Io { .. } => ErrorKind::Io,
        }
    }
}
