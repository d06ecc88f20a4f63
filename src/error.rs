//! Error types for topology compilation and specification writing.

use thiserror::Error;

/// Result type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while compiling or serializing a specification.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller passed data of the wrong shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Fragment text could not be parsed as a formula.
    #[error("Parse error at byte {pos}: {message}")]
    Parse { pos: usize, message: String },

    /// The output file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a parse error at the given byte offset.
    pub fn parse(pos: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            pos,
            message: message.into(),
        }
    }
}
