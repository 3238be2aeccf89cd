//! benchdash — benchmark dashboard pipeline.
//!
//! Ingests crowdsourced GPU/CPU benchmark CSV exports and aggregates them
//! into the summary views a dashboard renders. This crate re-exports the
//! pipeline and the feeds so that integration tests and the CLI can import
//! them from one place.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► ingest ──► filter ──► aggregate ──► Report
//! ```
//!
//! Everything after the feed is synchronous and pure.

pub mod report;

pub use benchdash_core as pipeline;
pub use benchdash_feeds as feeds;

pub use benchdash_core::{
    aggregate, ingest, AggregateViews, CanonicalRecord, Config, Dataset, GpuBrand, IngestError,
    RecordFilter,
};
pub use report::Report;
