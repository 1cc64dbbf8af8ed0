//! One interactive renaming session.
//!
//! [`Session`] is the explicitly-owned replacement for the original tool's
//! ambient per-session storage: it holds exactly one [`Registry`] plus the
//! loaded [`AppConfig`], and every front-end action maps onto one of its
//! methods. A multi-user server would construct one `Session` per user;
//! nothing in here is shared or `static`.

use crate::error::{ErrorKind, Result};
use batchname_config::AppConfig;
use batchname_naming::NamingSpec;
use batchname_registry::{Direction, ItemId, Registry};
use exn::{OptionExt, ResultExt};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use tracing::instrument;

/// One line of the rename preview, everything a front-end needs to draw a
/// row: current rank, identity for reorder callbacks, both names, and
/// whether to attempt a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub position: usize,
    pub id: ItemId,
    pub original_name: String,
    pub rendered_name: String,
    pub is_image: bool,
}

/// The packaged, downloadable result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested filename for the container (`{code}[-{title}].zip`).
    pub filename: String,
    /// The ZIP container bytes.
    pub bytes: Vec<u8>,
}

/// Owns the batch state for one interaction cycle.
pub struct Session {
    config: AppConfig,
    registry: Registry,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self { config, registry: Registry::new() }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Replaces the batch with in-memory `(name, bytes)` pairs.
    pub fn ingest<I, N, P>(&mut self, files: I)
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<Vec<u8>>,
    {
        self.registry.load(files);
    }

    /// Replaces the batch with files read from disk.
    ///
    /// Every path is read before the registry is touched, so an unreadable
    /// entry rejects the whole upload atomically and the previous batch
    /// survives intact.
    #[instrument(skip_all, fields(count = paths.len()))]
    pub fn ingest_paths(&mut self, paths: &[PathBuf]) -> Result<()> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = fs::read(path).or_raise(|| ErrorKind::Ingest(path.clone()))?;
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_raise(|| ErrorKind::Ingest(path.clone()))?
                .to_string();
            files.push((name, bytes));
        }
        self.registry.load(files);
        Ok(())
    }

    /// Builds the naming spec for this evaluation from raw input, filling
    /// anything the caller didn't override from the configured defaults.
    ///
    /// Derived fresh on every call — the spec has no persisted identity.
    pub fn parse_spec(
        &self,
        raw: &str,
        start_number: Option<i64>,
        pad_width: Option<usize>,
        sanitize: Option<bool>,
    ) -> Result<NamingSpec> {
        let defaults = &self.config.naming;
        let spec = raw
            .parse::<NamingSpec>()
            .or_raise(|| ErrorKind::Naming)?
            .with_start_number(start_number.unwrap_or(defaults.start_number))
            .with_pad_width(pad_width.unwrap_or(defaults.pad_width));
        Ok(if sanitize.unwrap_or(defaults.sanitize_titles) { spec.slugged() } else { spec })
    }

    /// Recomputes the full rename preview for the current ordering.
    pub fn preview(&self, spec: &NamingSpec) -> Vec<PreviewRow> {
        self.registry
            .ordered_view()
            .into_iter()
            .map(|item| PreviewRow {
                position: item.position(),
                id: item.id(),
                original_name: item.original_name().to_string(),
                rendered_name: spec.render_name(spec.sequence_number(item.position()), item.extension()),
                is_image: item.is_image(),
            })
            .collect()
    }

    /// Nudges the selected items one step; see [`Registry::move_selected`].
    pub fn move_selected(&mut self, selected: &HashSet<ItemId>, direction: Direction) {
        self.registry.move_selected(selected, direction);
    }

    /// Rank-table reorder; see [`Registry::reorder`].
    pub fn reorder(&mut self, ranks: &HashMap<ItemId, i64>) -> Result<()> {
        self.registry.reorder(ranks).or_raise(|| ErrorKind::Reorder)
    }

    /// Drag-style reorder by id permutation; see
    /// [`Registry::set_explicit_order`].
    pub fn set_explicit_order(&mut self, ordered: &[ItemId]) -> Result<()> {
        self.registry.set_explicit_order(ordered).or_raise(|| ErrorKind::Reorder)
    }

    /// Reorders by *current* 1-based positions, e.g. `[3, 1, 2]` puts the
    /// item now at position 3 first. Convenience for front-ends that talk
    /// positions instead of ids (the CLI's `--order`); resolves to ids and
    /// delegates, so all permutation validation applies.
    pub fn order_by_positions(&mut self, positions: &[usize]) -> Result<()> {
        let view = self.registry.ordered_view();
        let mut ordered = Vec::with_capacity(positions.len());
        for &position in positions {
            match position.checked_sub(1).and_then(|index| view.get(index)) {
                Some(item) => ordered.push(item.id()),
                None => exn::bail!(ErrorKind::Reorder),
            }
        }
        drop(view);
        self.set_explicit_order(&ordered)
    }

    /// Packages the batch: renders every output name at the current
    /// ordering and hands the ordered `(name, bytes)` list to the archive
    /// boundary.
    ///
    /// An empty batch yields [`ErrorKind::EmptyBatch`], which front-ends
    /// surface as a non-blocking notice rather than a failure.
    #[instrument(skip_all, fields(count = self.registry.len()))]
    pub fn package(&self, spec: &NamingSpec) -> Result<Artifact> {
        if self.registry.is_empty() {
            exn::bail!(ErrorKind::EmptyBatch);
        }
        let entries: Vec<(String, &[u8])> = self
            .registry
            .ordered_view()
            .into_iter()
            .map(|item| {
                (spec.render_name(spec.sequence_number(item.position()), item.extension()), item.payload())
            })
            .collect();
        let bytes =
            batchname_archive::build(&entries, self.config.archive.method).or_raise(|| ErrorKind::Package)?;
        Ok(Artifact { filename: spec.render_archive_name(), bytes })
    }
}
