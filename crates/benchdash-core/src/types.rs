//! Core types for benchdash-core.
//!
//! This module defines the data structures shared across every pipeline
//! stage: the [`CanonicalRecord`] produced by the record builder, the entry
//! types of each aggregate view, and the [`Dataset`] returned by ingestion.

use serde::Serialize;

/// One benchmark observation normalised to the fixed field set.
///
/// A record only exists when both `gpu` and `cpu` were non-empty after
/// trimming; rows failing that are dropped by the record builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Canonical GPU name (see [`crate::canon::canonicalize_gpu`]).
    pub gpu: String,
    /// Canonical CPU name (see [`crate::canon::canonicalize_cpu`]).
    pub cpu: String,
    /// Raw screen resolution. May be empty.
    pub resolution: String,
    /// Raw graphics preset. May be empty.
    pub graphics_settings: String,
    /// Ray tracing level, `"Off"` when missing.
    pub ray_tracing: String,
    /// Frame generation flag, `"Disabled"` when missing.
    pub frame_generation: String,
    /// Canonical upscaling technology, `"None"` when missing.
    pub upscaling: String,
    /// Average FPS, `0.0` when missing or unparsable. Never negative.
    pub avg_fps: f64,
    /// Benchmark score, `0.0` when missing or unparsable. Never negative.
    pub score: f64,
    /// Canonical verdict. Empty when the cell was empty.
    pub verdict: String,
}

impl Default for CanonicalRecord {
    fn default() -> Self {
        Self {
            gpu: String::new(),
            cpu: String::new(),
            resolution: String::new(),
            graphics_settings: String::new(),
            ray_tracing: DEFAULT_RAY_TRACING.to_string(),
            frame_generation: DEFAULT_FRAME_GENERATION.to_string(),
            upscaling: DEFAULT_UPSCALING.to_string(),
            avg_fps: 0.0,
            score: 0.0,
            verdict: String::new(),
        }
    }
}

pub const DEFAULT_RAY_TRACING: &str = "Off";
pub const DEFAULT_FRAME_GENERATION: &str = "Disabled";
pub const DEFAULT_UPSCALING: &str = "None";
pub const UNKNOWN: &str = "Unknown";

/// Mean FPS of one canonical GPU.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuPerformanceEntry {
    pub name: String,
    /// Mean FPS rounded to two decimal places.
    pub avg_fps: f64,
    pub sample_count: usize,
}

/// A name with an occurrence count. Shared by every categorical view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

pub type CpuFrequencyEntry = CountEntry;
pub type VerdictEntry = CountEntry;
pub type RayTracingEntry = CountEntry;
pub type ResolutionEntry = CountEntry;
pub type UpscalingEntry = CountEntry;

/// One of the six fixed FPS histogram buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FpsRangeBucket {
    pub range_label: String,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound, `None` for the open-ended top bucket.
    pub max: Option<f64>,
    pub count: usize,
}

/// The seven views computed by [`crate::aggregate::aggregate`].
///
/// Every run produces fresh vectors; nothing here is shared with the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateViews {
    pub gpu_performance: Vec<GpuPerformanceEntry>,
    pub cpu_frequency: Vec<CpuFrequencyEntry>,
    pub verdicts: Vec<VerdictEntry>,
    pub ray_tracing: Vec<RayTracingEntry>,
    pub resolutions: Vec<ResolutionEntry>,
    pub fps_ranges: Vec<FpsRangeBucket>,
    pub upscaling: Vec<UpscalingEntry>,
}

/// Result of a successful ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Identifier of the raw-text source (path, URL, `stdin`, …).
    pub source: String,
    /// Line index of the header row that was used.
    pub header_index: usize,
    /// `true` when no header was found and the fallback index was used.
    pub header_fallback: bool,
    /// Non-empty data lines that were dropped as row-level noise.
    pub skipped_rows: usize,
    pub records: Vec<CanonicalRecord>,
}
