use crate::error::{ErrorKind, Result};
use crate::item::{Item, ItemId};
use std::collections::{HashMap, HashSet};
use tracing::instrument;

/// Direction of travel for [`Registry::move_selected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards position 1.
    Up,
    /// Towards position N.
    Down,
}

/// Owns one batch of uploaded items and their display positions.
///
/// Created empty and repopulated wholesale by [`load`](Self::load) — there
/// is no incremental append, a new upload replaces the previous batch
/// entirely. Construct one instance per interactive session; nothing in
/// here is shared or `static`.
///
/// # Invariant
/// After every operation the positions of the `N` items are exactly the set
/// `{1..N}`. Operations that accept free-form position input renormalize to
/// that range; operations that accept a permutation reject invalid input
/// before any mutation.
#[derive(Debug, Default)]
pub struct Registry {
    /// Stored in upload order; display rank lives in each item's `position`.
    items: Vec<Item>,
    /// Monotonic id source, deliberately not reset by [`load`](Self::load).
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire batch with the given `(name, bytes)` pairs.
    ///
    /// Ids come from the monotonic counter; positions are the 1-based upload
    /// order; extensions are derived from the names once, here. Zero-byte
    /// payloads are legal and preserved — `load` never fails on content.
    /// (Unreadable sources are the ingesting front-end's problem and must be
    /// rejected before this point.)
    #[instrument(skip_all, fields(count))]
    pub fn load<I, N, P>(&mut self, files: I)
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<Vec<u8>>,
    {
        self.items.clear();
        for (index, (name, payload)) in files.into_iter().enumerate() {
            self.next_id += 1;
            self.items.push(Item::new(ItemId(self.next_id), name.into(), payload.into(), index + 1));
        }
        tracing::Span::current().record("count", self.items.len());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items sorted ascending by position.
    ///
    /// Ties cannot occur under the dense-position invariant; should one ever
    /// appear, the stable sort falls back to upload order.
    pub fn ordered_view(&self) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items.iter().collect();
        view.sort_by_key(|item| item.position);
        view
    }

    /// Nudges every selected item one step in `direction`.
    ///
    /// Each selected item swaps with the adjacent *non-selected* item in the
    /// travel direction. The scan runs in the direction of travel
    /// (top-to-bottom for [`Up`](Direction::Up), bottom-to-top for
    /// [`Down`](Direction::Down)) so a contiguous selected block moves as
    /// one unit instead of its members swapping with each other. Items
    /// already at the boundary silently stay put; ids not present in the
    /// batch are ignored (a front-end can only select rows that exist).
    #[instrument(skip(self))]
    pub fn move_selected(&mut self, selected: &HashSet<ItemId>, direction: Direction) {
        let mut order = self.current_order();
        let is_selected = |index: usize| selected.contains(&self.items[index].id());
        match direction {
            Direction::Up => {
                for i in 1..order.len() {
                    if is_selected(order[i]) && !is_selected(order[i - 1]) {
                        order.swap(i, i - 1);
                    }
                }
            },
            Direction::Down => {
                for i in (0..order.len().saturating_sub(1)).rev() {
                    if is_selected(order[i]) && !is_selected(order[i + 1]) {
                        order.swap(i, i + 1);
                    }
                }
            },
        }
        self.apply_order(&order);
    }

    /// Overrides the positions of the named items with the supplied ranks,
    /// then renormalizes to dense `{1..N}`.
    ///
    /// Ranks are free-form integers: duplicates, gaps, and out-of-range
    /// values are all legal and resolve by sorting — items keep their
    /// previous relative order wherever ranks tie. Items not named keep
    /// their current position as their rank. Every named id is validated
    /// first; an unknown id rejects the whole call with no mutation.
    #[instrument(skip(self), fields(ranked = ranks.len()))]
    pub fn reorder(&mut self, ranks: &HashMap<ItemId, i64>) -> Result<()> {
        for id in ranks.keys() {
            if self.get(*id).is_none() {
                exn::bail!(ErrorKind::UnknownItem(*id));
            }
        }
        let mut keyed: Vec<(i64, usize, usize)> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let rank = ranks.get(&item.id()).copied().unwrap_or(item.position as i64);
                (rank, item.position, index)
            })
            .collect();
        keyed.sort_by_key(|&(rank, previous, _)| (rank, previous));
        let order: Vec<usize> = keyed.into_iter().map(|(_, _, index)| index).collect();
        self.apply_order(&order);
        Ok(())
    }

    /// Assigns positions `1..N` in the exact sequence given.
    ///
    /// This is the freeform (drag) reorder path: the front-end hands back a
    /// permutation of *ids*, so nothing ever needs to be matched by content.
    /// The sequence must be a permutation of the current id set; anything
    /// else is rejected atomically before any position changes.
    #[instrument(skip_all, fields(count = ordered.len()))]
    pub fn set_explicit_order(&mut self, ordered: &[ItemId]) -> Result<()> {
        if ordered.len() != self.items.len() {
            exn::bail!(ErrorKind::LengthMismatch { expected: self.items.len(), got: ordered.len() });
        }
        let index_of: HashMap<ItemId, usize> =
            self.items.iter().enumerate().map(|(index, item)| (item.id(), index)).collect();
        let mut seen = HashSet::with_capacity(ordered.len());
        let mut order = Vec::with_capacity(ordered.len());
        for id in ordered {
            if !seen.insert(*id) {
                exn::bail!(ErrorKind::DuplicateItem(*id));
            }
            match index_of.get(id) {
                Some(&index) => order.push(index),
                None => exn::bail!(ErrorKind::UnknownItem(*id)),
            }
        }
        self.apply_order(&order);
        Ok(())
    }

    /// Storage indices sorted by current position.
    fn current_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by_key(|&index| self.items[index].position);
        order
    }

    /// Writes dense positions `1..N` following `order` (storage indices).
    fn apply_order(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.items.len());
        for (rank, &index) in order.iter().enumerate() {
            self.items[index].position = rank + 1;
        }
    }
}
