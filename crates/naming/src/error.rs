//! Naming Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A naming error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for naming operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a naming-spec input can fail validation.
///
/// These are surfaced to the user as validation messages; no batch state is
/// ever touched on the way here. `MissingCode` and `MalformedCode` are kept
/// distinct so a front-end can tell "you typed nothing" apart from "that's
/// not a code".
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Blank input: there is no code to validate.
    #[display("no code found in naming input")]
    MissingCode,
    /// Something code-shaped was present but it is not six ASCII digits.
    #[display("malformed code {_0:?}: expected exactly six digits")]
    MalformedCode(#[error(not(source))] String),
    /// A title separator with nothing after it (`"123456-"`).
    #[display("title separator present but title is empty")]
    EmptyTitle,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The input is either a valid naming spec or it isn't.
        false
    }
}
