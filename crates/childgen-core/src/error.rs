//! Error handling for the childgen srcjar generator.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from the I/O and ZIP error types.
//!
//! # Examples
//!
//! ```
//! use childgen_core::error::{Error, Result};
//!
//! fn parse_slots(raw: &str) -> Result<u32> {
//!     raw.parse().map_err(|_| Error::invalid_argument(format!("bad count '{raw}'")))
//! }
//!
//! assert!(parse_slots("abc").is_err());
//! ```

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use thiserror::Error;

/// Result type for childgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for childgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// The invocation could not be resolved into a valid run
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The same entry name was added to an archive twice
    #[error("Duplicate archive entry: {0}")]
    DuplicateEntry(String),

    /// The ZIP encoder rejected an operation
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing or replacing the output file failed
    #[error("Failed to publish {}: {source}", path.display())]
    Publish {
        /// Destination that was being written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new publish error for `path`
    pub fn publish(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Publish {
            path: path.into(),
            source,
        }
    }
}
