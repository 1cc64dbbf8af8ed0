//! In-memory ZIP packaging for renamed batches.
//!
//! The packaging boundary of the tool: [`build`] consumes the final ordered
//! `(rendered_name, bytes)` list and produces the downloadable container as
//! a byte buffer. Entry names arrive rendered and unique by construction
//! (the naming engine guarantees no collisions within a batch), so this
//! crate only concerns itself with the container format.
//!
//! Entries are written in the order given — archive listings mirror the
//! batch's display order.

pub mod error;

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Write};
use tracing::instrument;
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

/// Entry compression for the produced container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Deflate each entry (the usual choice).
    #[default]
    Deflate,
    /// Store entries uncompressed; larger output, cheaper packaging.
    Store,
}

impl Method {
    fn as_zip(self) -> CompressionMethod {
        match self {
            Method::Deflate => CompressionMethod::Deflated,
            Method::Store => CompressionMethod::Stored,
        }
    }
}

/// Builds the ZIP container from the ordered `(name, bytes)` entries.
///
/// Rendered names cannot normally contain path separators, but raw
/// (unslugged) titles could smuggle them in; separators are flattened to
/// hyphens so every entry stays a plain top-level filename and no two
/// distinct names can merge into one.
///
/// ```
/// use batchname_archive::Method;
///
/// let entries = [("252798-1.png".to_string(), b"bytes".as_slice())];
/// let container = batchname_archive::build(&entries, Method::Deflate).unwrap();
/// // ZIP local-file-header magic
/// assert_eq!(&container[..4], b"PK\x03\x04");
/// ```
#[instrument(skip_all, fields(entries = entries.len(), bytes))]
pub fn build(entries: &[(String, &[u8])], method: Method) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut container = ZipWriter::new(Cursor::new(&mut buffer));
        let options = FileOptions::default().compression_method(method.as_zip()).unix_permissions(0o644);
        for (name, data) in entries {
            container.start_file(entry_file_name(name), options).or_raise(|| ErrorKind::Zip)?;
            container.write_all(data).or_raise(|| ErrorKind::Io)?;
        }
        container.finish().or_raise(|| ErrorKind::Zip)?;
    }
    tracing::Span::current().record("bytes", buffer.len());
    Ok(buffer)
}

/// Flattens path separators out of an entry name.
fn entry_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}
