use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by library operations
#[derive(Debug, Error)]
pub enum LibraryError {
    /// A numeric field was below its minimum of 1
    #[error("invalid argument: {field} must be at least 1, got {value}")]
    InvalidArgument {
        /// Name of the rejected field
        field: &'static str,
        /// The rejected value
        value: i32,
    },
    /// No snapshot exists at the given location
    #[error("nothing to load, save the library first: {} not found", path.display())]
    NotFound {
        /// Where the snapshot was expected
        path: PathBuf,
    },
    /// A snapshot could not be turned into a valid library
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// Console or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A library could not be encoded as JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LibraryError {
    /// Check a value against the `>= 1` rule shared by pages and periods
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidArgument` when `value < 1`.
    pub fn require_positive(field: &'static str, value: i32) -> Result<u32, Self> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v >= 1)
            .ok_or(Self::InvalidArgument { field, value })
    }
}
