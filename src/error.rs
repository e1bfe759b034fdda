//! Error types for arrowpane.

use std::path::PathBuf;

/// Result type alias for arrowpane operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while previewing a columnar file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was missing or empty.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the offending argument.
        message: String,
    },

    /// An operation was invoked outside its valid session state.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the state violation.
        message: String,
    },

    /// The source file could not be resolved or opened.
    #[error("Source unavailable at {path:?}: {source}")]
    SourceUnavailable {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Arrow decode failure: reader construction or a batch read failed.
    #[error("Decode failure: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet decode failure: reader construction or a batch read failed.
    #[error("Decode failure: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// The file extension does not map to a known container format.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        /// The unrecognized format name or extension.
        format: String,
    },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create a source unavailable error from an I/O error and path.
    pub fn source_unavailable(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// True if this error is a decode failure (Arrow or Parquet).
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Arrow(_) | Self::Parquet(_))
    }
}
