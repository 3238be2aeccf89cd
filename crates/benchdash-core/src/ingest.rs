//! Ingestion entry point: raw text in, [`Dataset`] out.
//!
//! Ties the header locator and the record builder together and applies the
//! whole-batch checks. Lines are split on `\n` only; a stray `\r` is trimmed
//! away by the record builder along with other surrounding whitespace.

use crate::config::HeaderConfig;
use crate::error::IngestError;
use crate::header::locate_header_with;
use crate::records::build_records_counted;
use crate::types::Dataset;

/// Ingest `text` with the default header window and fallback.
pub fn ingest(text: &str, source: &str) -> Result<Dataset, IngestError> {
    ingest_with(text, source, &HeaderConfig::default())
}

pub fn ingest_with(text: &str, source: &str, cfg: &HeaderConfig) -> Result<Dataset, IngestError> {
    if text.trim().is_empty() {
        return Err(IngestError::EmptyInput);
    }
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return Err(IngestError::EmptyInput);
    }

    let header = locate_header_with(&lines[..], cfg);
    let built = build_records_counted(&lines[..], header.index)?;

    if built.records.is_empty() {
        return Err(IngestError::NoValidRows {
            header_index: header.index,
        });
    }

    tracing::info!(
        source,
        header_index = header.index,
        fallback = header.fallback,
        records = built.records.len(),
        skipped = built.skipped,
        "ingested benchmark data"
    );

    Ok(Dataset {
        source: source.to_string(),
        header_index: header.index,
        header_fallback: header.fallback,
        skipped_rows: built.skipped,
        records: built.records,
    })
}
