//! Application Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. Kinds here wrap the member crates'
//! errors at the session boundary; the inner error rides along as the
//! source.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The layered configuration could not be loaded.
    #[display("could not load configuration")]
    Config,
    /// An uploaded source could not be read; the batch is left untouched.
    #[display("could not read {}", _0.display())]
    Ingest(#[error(not(source))] PathBuf),
    /// The naming input failed validation.
    #[display("invalid naming input")]
    Naming,
    /// A reorder input was rejected; positions are unchanged.
    #[display("invalid reorder input")]
    Reorder,
    /// Packaging was requested on an empty batch. A notice, not a failure:
    /// there is nothing to do and nothing was mutated.
    #[display("the batch is empty; nothing to package")]
    EmptyBatch,
    /// The container could not be built.
    #[display("failed to package the batch")]
    Package,
    /// The packaged artifact could not be written out.
    #[display("could not write {}", _0.display())]
    Output(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Reading a source or writing the artifact can succeed on a second
        // attempt once the filesystem cooperates; validation cannot.
        matches!(self, ErrorKind::Ingest(_) | ErrorKind::Output(_))
    }
}
