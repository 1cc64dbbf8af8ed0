//! Naming engine: deterministic output filenames for a renamed batch.
//!
//! Converts one validated [`NamingSpec`] plus an item's sequence number and
//! extension into its output filename,
//! `{code}-{sequence_number}-{title}{extension}`. Parsing is the sole gate:
//! the combined `CODE[-TITLE]` input grammar (six-digit code, optional
//! free-text title) is validated up front and an invalid code can never
//! reach rendering. Titles can optionally be normalized to a restricted
//! filename alphabet via [`sanitize_title`].
//!
//! Everything in this crate is pure — same inputs, same names, no state.

pub mod error;
mod sanitize;
mod spec;

pub use crate::sanitize::{FALLBACK_TITLE, sanitize_title};
pub use crate::spec::NamingSpec;
