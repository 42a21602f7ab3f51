//! Error types for the Cadenza library.
//!
//! This module provides error handling for all Cadenza operations. All errors
//! are represented by the [`CadenzaError`] enum.
//!
//! # Examples
//!
//! ```
//! use cadenza::error::{CadenzaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CadenzaError::dictionary("empty dictionary source"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Cadenza operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum CadenzaError {
    /// I/O errors (unreadable or unopenable dictionary sources)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors (load, lookup preconditions)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Query-related errors (invalid query arguments)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CadenzaError.
pub type Result<T> = std::result::Result<T, CadenzaError>;

impl CadenzaError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        CadenzaError::Dictionary(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        CadenzaError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CadenzaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CadenzaError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = CadenzaError::dictionary("Test dictionary error");
        assert_eq!(error.to_string(), "Dictionary error: Test dictionary error");

        let error = CadenzaError::query("Test query error");
        assert_eq!(error.to_string(), "Query error: Test query error");

        let error = CadenzaError::other("Test other error");
        assert_eq!(error.to_string(), "Error: Test other error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let cadenza_error = CadenzaError::from(io_error);

        match cadenza_error {
            CadenzaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
