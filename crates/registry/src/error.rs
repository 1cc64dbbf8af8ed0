//! Registry Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use crate::item::ItemId;
use derive_more::{Display, Error};

/// A registry error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a reorder input was rejected.
///
/// Every kind here means the supplied order was not a valid description of
/// the current batch; the registry is left untouched in all cases.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An explicit order did not name every item exactly once.
    #[display("supplied order names {got} items, batch holds {expected}")]
    LengthMismatch {
        /// Number of items currently in the batch.
        expected: usize,
        /// Number of ids in the supplied order.
        got: usize,
    },
    /// An id that is not part of the current batch.
    #[display("unknown item: {_0}")]
    UnknownItem(#[error(not(source))] ItemId),
    /// An id listed more than once in an explicit order.
    #[display("item listed twice: {_0}")]
    DuplicateItem(#[error(not(source))] ItemId),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Reorder inputs are either valid for the current batch or they
        // aren't; resubmitting the same input changes nothing.
        false
    }
}
