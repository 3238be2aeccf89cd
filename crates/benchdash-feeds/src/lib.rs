//! benchdash-feeds — raw-text sources for benchdash.
//!
//! A feed hands the pipeline one complete text blob plus an identifier for
//! where it came from. Bytes are decoded as lossy UTF-8 and a leading byte
//! order mark is dropped, so spreadsheet exports saved on Windows ingest the
//! same as anything else.

pub mod file;
pub mod stdin;

pub use file::FileFeed;
pub use stdin::{stdin, ReaderFeed};

use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read {source_id}: {source}")]
    Io {
        source_id: String,
        #[source]
        source: std::io::Error,
    },

    /// The source produced zero bytes.
    #[error("{source_id} is empty")]
    Empty { source_id: String },
}

/// Trait implemented by each raw-text source.
pub trait Feed {
    /// Identifier reported in the ingestion result (a path, `stdin`, …).
    fn source_id(&self) -> &str;

    /// Read the whole source. Feeds are single-shot; a second call may
    /// return different data or fail.
    fn read_text(&mut self) -> Result<String, FeedError>;
}

const BOM: char = '\u{feff}';

/// Drain `reader` and decode it.
pub(crate) fn read_all<R: Read>(reader: &mut R, source_id: &str) -> Result<String, FeedError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|source| FeedError::Io {
        source_id: source_id.to_string(),
        source,
    })?;

    if bytes.is_empty() {
        return Err(FeedError::Empty {
            source_id: source_id.to_string(),
        });
    }

    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix(BOM).unwrap_or(&text).to_string();
    tracing::debug!(source = source_id, bytes = bytes.len(), "feed read");
    Ok(text)
}
