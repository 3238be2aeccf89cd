//! Fatal ingestion conditions.
//!
//! Row-level defects (short rows, empty GPU/CPU cells, unparsable numbers) are
//! absorbed by the record builder and never surface here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// Text is blank or has fewer than two lines.
    #[error("received empty data: the source has no header or data rows")]
    EmptyInput,

    /// The header row lacks GPU and/or CPU Model.
    #[error(
        "could not find required columns ({}) in header row {header_index}",
        .missing.join(", ")
    )]
    MissingRequiredColumns {
        header_index: usize,
        missing: Vec<&'static str>,
    },

    /// Every data line was skipped.
    #[error("no valid data rows found after header row {header_index}")]
    NoValidRows { header_index: usize },
}
