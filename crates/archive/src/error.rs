//! Archive Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An archive error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Transport-level packaging failures.
///
/// Domain errors cannot reach this boundary: entry names arrive rendered and
/// unique, so everything here is the container format or IO misbehaving.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Writing entry bytes into the in-memory container failed.
    #[display("failed writing entry data into the archive")]
    Io,
    /// The ZIP container itself could not be constructed or finalized.
    #[display("failed to build the ZIP container")]
    Zip,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // In-memory packaging has no transient failure modes.
        false
    }
}
