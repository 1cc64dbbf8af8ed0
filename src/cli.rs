//! Command-line front-end.
//!
//! Both subcommands are thin callers of the same [`Session`](crate::session::Session)
//! operations: `preview` prints the rename table, `pack` additionally writes
//! the packaged archive. The one-shot `--order` flag covers reordering here;
//! interactive front-ends get the nudge/rank operations instead.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "batchname", version, about = "Bulk-rename files to {code}-{n}-{title}{ext} and package them as a ZIP")]
pub struct Cli {
    /// Configuration file (defaults to the platform config location).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the rename preview for a batch without packaging anything.
    Preview(BatchArgs),
    /// Package the renamed batch into a ZIP archive.
    Pack {
        #[command(flatten)]
        batch: BatchArgs,
        /// Where to write the archive (defaults to the derived
        /// {code}[-{title}].zip in the current directory).
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Files to rename, in upload order.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Naming input: a six-digit code, optionally followed by a hyphen and
    /// a title (e.g. "252798-AppleWatch").
    #[arg(long, short = 's', value_name = "CODE[-TITLE]")]
    pub spec: String,

    /// Sequence number for the first file (configured default: 1).
    #[arg(long, value_name = "N")]
    pub start_number: Option<i64>,

    /// Zero-pad sequence numbers to this width (configured default: off).
    #[arg(long, value_name = "WIDTH")]
    pub pad_width: Option<usize>,

    /// Normalize the title to lowercase-ascii-and-hyphens before rendering.
    #[arg(long)]
    pub slug: bool,

    /// Reorder before numbering, as a comma-separated permutation of the
    /// current positions (e.g. --order 3,1,2 puts the third file first).
    #[arg(long, value_delimiter = ',', value_name = "POS,POS,...")]
    pub order: Option<Vec<usize>>,
}
