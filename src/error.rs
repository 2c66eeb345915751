//! Error types for the Lectern library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LecternError`] enum. Validation failures surface as
//! [`LecternError::InvalidArgument`] before any index mutation happens.
//!
//! # Examples
//!
//! ```
//! use lectern::error::{LecternError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LecternError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lectern operations.
#[derive(Error, Debug)]
pub enum LecternError {
    /// Malformed input: bad document id, control characters, bad query syntax.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A document id that is not present in the index.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failures of the engine's own machinery (thread pool setup and the like).
    #[error("Internal error: {0}")]
    Internal(String),

    /// I/O errors (document files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LecternError.
pub type Result<T> = std::result::Result<T, LecternError>;

impl LecternError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LecternError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LecternError::NotFound(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        LecternError::Internal(msg.into())
    }

    /// Whether this error was caused by invalid caller input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LecternError::InvalidArgument(_))
    }

    /// Whether this error reports an unknown document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LecternError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LecternError::invalid_argument("document id -1 is negative");
        assert_eq!(
            error.to_string(),
            "Invalid argument: document id -1 is negative"
        );
        assert!(error.is_invalid_argument());

        let error = LecternError::not_found("document 7");
        assert_eq!(error.to_string(), "Not found: document 7");
        assert!(error.is_not_found());
        assert!(!error.is_invalid_argument());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LecternError::from(io_error);

        match error {
            LecternError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
