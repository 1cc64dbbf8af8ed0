use derive_more::Display;

/// Extensions recognized as browser-renderable images, compared
/// case-insensitively. Used by presentation layers to decide between a
/// thumbnail and a generic-file display.
const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".bmp", ".webp"];

/// Opaque stable identifier for an [`Item`].
///
/// Assigned once at ingestion from a counter that only ever increases, so an
/// id is never reused — not even across wholesale batch replacements.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("item_{_0}")]
pub struct ItemId(pub(crate) u64);

/// One uploaded file.
///
/// Identity (`id`), display name (`original_name`), `extension`, and
/// `payload` are fixed at ingestion; only `position` changes afterwards, and
/// only through the registry's reorder operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    original_name: String,
    extension: String,
    payload: Vec<u8>,
    pub(crate) position: usize,
}

impl Item {
    pub(crate) fn new(id: ItemId, original_name: String, payload: Vec<u8>, position: usize) -> Self {
        // Derived once, here. The extension must stay stable for the item's
        // whole lifetime even if name-splitting rules ever change.
        let extension = split_extension(&original_name).to_string();
        Self { id, original_name, extension, payload, position }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The display name the file was uploaded with, unmodified.
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// The extension derived at ingestion, leading dot included (e.g.
    /// `".png"`), or the empty string if the name carried none. Case is
    /// preserved as uploaded.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The immutable byte content captured at ingestion. Borrowed, never
    /// copied — preview and packaging both read through this reference.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The current 1-based display rank within the batch.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the extension names a recognized image type
    /// (case-insensitive), i.e. whether a front-end should attempt a
    /// thumbnail for this item.
    ///
    /// ```
    /// use batchname_registry::Registry;
    ///
    /// let mut registry = Registry::new();
    /// registry.load([("photo.JPG", b"\xff\xd8".to_vec()), ("doc.pdf", b"%PDF".to_vec())]);
    /// let view = registry.ordered_view();
    /// assert!(view[0].is_image());
    /// assert!(!view[1].is_image());
    /// ```
    pub fn is_image(&self) -> bool {
        let lowered = self.extension.to_ascii_lowercase();
        IMAGE_EXTENSIONS.contains(&lowered.as_str())
    }
}

/// Splits the extension (including the leading dot) off a display name.
///
/// The last `.` wins (`archive.tar.gz` → `.gz`). A name consisting only of
/// leading dots and a stem (`.gitignore`, `..config`) has no extension.
fn split_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) if name[..index].chars().any(|c| c != '.') => &name[index..],
        _ => "",
    }
}
