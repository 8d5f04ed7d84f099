//! Error types for thesisfmt library.

use std::io;
use thiserror::Error;

/// Result type alias for thesisfmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around document generation.
///
/// Formatting itself is total: classification, segmentation and layout never
/// fail. Errors only surface at the input and serialization boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Content or configuration could not be decoded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested serializer is not available.
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// A serializer failed while emitting the document.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}
