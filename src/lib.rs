//! Bulk-rename a batch of files to a templated naming scheme
//! (`{code}-{sequence_number}-{title}{extension}`) and package the result as
//! a downloadable ZIP.
//!
//! The member crates hold the moving parts — `batchname-registry` for batch
//! state and ordering, `batchname-naming` for validation and name
//! rendering, `batchname-archive` for the container, `batchname-config` for
//! layered defaults. This crate ties them together behind
//! [`session::Session`] and fronts that with a CLI.

pub mod cli;
pub mod error;
pub mod session;

pub use crate::session::{Artifact, PreviewRow, Session};
