//! Batch registry: the canonical ordered list of uploaded items.
//!
//! A [`Registry`] owns one batch of uploaded files. Each file becomes an
//! [`Item`] with a stable [`ItemId`], the name and bytes it was uploaded
//! with, and a dense 1-based `position` that determines render order.
//!
//! Positions always form the exact set `{1..N}` — no duplicates, no gaps.
//! The three reorder operations ([`Registry::move_selected`],
//! [`Registry::reorder`], [`Registry::set_explicit_order`]) are the only
//! ways to mutate positions, and each one either renormalizes to a dense
//! range or rejects its input atomically before touching anything. Every
//! reorder front-end (drag gesture, rank table, nudge buttons) is just a
//! different caller of one of these three.

pub mod error;
mod item;
mod registry;

pub use crate::item::{Item, ItemId};
pub use crate::registry::{Direction, Registry};
