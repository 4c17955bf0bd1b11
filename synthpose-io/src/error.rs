//! Error types for I/O operations

use thiserror::Error;

/// Format-level errors raised while decoding files written by this crate
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Invalid file format: {format}")]
    InvalidFormat { format: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<IoError> for synthpose_core::Error {
    fn from(err: IoError) -> Self {
        match err {
            IoError::Io(e) => synthpose_core::Error::Io(e),
            other => synthpose_core::Error::InvalidData(other.to_string()),
        }
    }
}

/// Map a `serde_json` failure into the core error
pub(crate) fn serialization(err: serde_json::Error) -> synthpose_core::Error {
    synthpose_core::Error::Serialization(err.to_string())
}
