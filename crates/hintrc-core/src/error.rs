//! Error types and handling for configuration mutation operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for `.hintrc` mutation operations
///
/// Failures propagate to the editor layer unchanged; there is no retry and
/// no partial recovery. When an operation fails after loading, the pending
/// in-memory mutation is simply lost.
#[derive(Debug, Error)]
pub enum HintrcError {
    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON in an existing configuration file
    #[error("Parse error in '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The `hints` collection is stored in a shape that cannot be merged into
    #[error("Unsupported config shape: {message}")]
    UnsupportedShapeError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    UnsupportedShape,
}

impl HintrcError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HintrcError::IoError { .. } => ErrorKind::Io,
            HintrcError::ParseError { .. } => ErrorKind::Parse,
            HintrcError::UnsupportedShapeError { .. } => ErrorKind::UnsupportedShape,
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with path context
    pub fn parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseError {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported-shape error
    pub fn unsupported_shape(message: impl Into<String>) -> Self {
        Self::UnsupportedShapeError {
            message: message.into(),
        }
    }
}
