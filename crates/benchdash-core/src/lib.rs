//! benchdash-core — benchmark ingestion, canonicalization and aggregation.
//!
//! This crate turns a loosely structured CSV export of crowdsourced GPU/CPU
//! benchmark runs into canonical records and a set of summary views. Every
//! stage is a pure, synchronous function of its input.
//!
//! # Pipeline
//!
//! ```text
//! text ──► header ──► records ──► filter ──► aggregate ──► views
//!                        │                       │
//!                        └──► canon              └──► summary / detail
//! ```
//!
//! Fatal conditions surface as [`IngestError`]; row-level noise is dropped
//! and only counted.

pub mod aggregate;
pub mod canon;
pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod header;
pub mod ingest;
pub mod records;
pub mod summary;
pub mod tokenizer;
pub mod types;

pub use aggregate::{aggregate, aggregate_with};
pub use config::{Config, HeaderConfig, ViewConfig};
pub use error::IngestError;
pub use filter::{GpuBrand, RecordFilter};
pub use ingest::{ingest, ingest_with};
pub use types::{AggregateViews, CanonicalRecord, CountEntry, Dataset, FpsRangeBucket, GpuPerformanceEntry};
