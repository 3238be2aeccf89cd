//! Local file feed.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::{read_all, Feed, FeedError};

/// Reads a CSV export from disk. The source id defaults to the path as given.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
    source_id: String,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let source_id = path.display().to_string();
        Self { path, source_id }
    }

    /// Override the identifier reported downstream.
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Feed for FileFeed {
    fn source_id(&self) -> &str {
        &self.source_id
    }

    fn read_text(&mut self) -> Result<String, FeedError> {
        let mut file = File::open(&self.path).map_err(|source| FeedError::Io {
            source_id: self.source_id.clone(),
            source,
        })?;
        read_all(&mut file, &self.source_id)
    }
}
