//! Stream feeds: standard input, or any other reader.

use std::io::Read;

use crate::{read_all, Feed, FeedError};

/// Wraps any [`Read`] implementation as a feed.
pub struct ReaderFeed<R> {
    reader: R,
    source_id: String,
}

impl<R: Read> ReaderFeed<R> {
    pub fn new(reader: R, source_id: impl Into<String>) -> Self {
        Self {
            reader,
            source_id: source_id.into(),
        }
    }
}

impl<R: Read> Feed for ReaderFeed<R> {
    fn source_id(&self) -> &str {
        &self.source_id
    }

    fn read_text(&mut self) -> Result<String, FeedError> {
        read_all(&mut self.reader, &self.source_id)
    }
}

/// Feed reading the process's standard input until EOF.
pub fn stdin() -> ReaderFeed<std::io::Stdin> {
    ReaderFeed::new(std::io::stdin(), "stdin")
}
