//! Aggregation engine — derives the seven summary views from a record set.
//!
//! Stateless: every call groups the input from scratch and returns freshly
//! allocated vectors. Groups keep first-encounter order and all sorts are
//! stable, so equal keys never reorder between runs.

use std::collections::HashMap;

use crate::config::ViewConfig;
use crate::types::{
    AggregateViews, CanonicalRecord, CountEntry, FpsRangeBucket, GpuPerformanceEntry,
    DEFAULT_RAY_TRACING, DEFAULT_UPSCALING, UNKNOWN,
};

/// The six FPS histogram buckets: label, inclusive min, inclusive max.
pub const FPS_RANGES: [(&str, f64, f64); 6] = [
    ("0-30", 0.0, 30.0),
    ("31-60", 31.0, 60.0),
    ("61-90", 61.0, 90.0),
    ("91-120", 91.0, 120.0),
    ("121-144", 121.0, 144.0),
    ("145+", 145.0, f64::INFINITY),
];

/// Compute every view with the default limits (15 GPUs, 10 CPUs, 6
/// resolutions).
pub fn aggregate(records: &[CanonicalRecord]) -> AggregateViews {
    aggregate_with(records, &ViewConfig::default())
}

pub fn aggregate_with(records: &[CanonicalRecord], limits: &ViewConfig) -> AggregateViews {
    let views = AggregateViews {
        gpu_performance: gpu_performance(records, limits.gpu_top),
        cpu_frequency: cpu_frequency(records, limits.cpu_top),
        verdicts: verdict_distribution(records),
        ray_tracing: ray_tracing_distribution(records),
        resolutions: resolution_distribution(records, limits.resolution_top),
        fps_ranges: fps_ranges(records),
        upscaling: upscaling_distribution(records),
    };

    tracing::debug!(
        records = records.len(),
        gpus = views.gpu_performance.len(),
        cpus = views.cpu_frequency.len(),
        verdicts = views.verdicts.len(),
        ray_tracing = views.ray_tracing.len(),
        resolutions = views.resolutions.len(),
        upscaling = views.upscaling.len(),
        "aggregation complete"
    );

    views
}

// ---------------------------------------------------------------------------
// Grouping helpers
// ---------------------------------------------------------------------------

/// Running sum and count per key, in first-encounter order.
pub(crate) struct Grouped<'a> {
    slots: HashMap<&'a str, usize>,
    groups: Vec<(&'a str, f64, usize)>,
}

impl<'a> Grouped<'a> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            groups: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: &'a str, value: f64) {
        let groups = &mut self.groups;
        let slot = *self.slots.entry(key).or_insert_with(|| {
            groups.push((key, 0.0, 0));
            groups.len() - 1
        });
        let group = &mut self.groups[slot];
        group.1 += value;
        group.2 += 1;
    }

    /// `(key, sum, count)` in first-encounter order.
    pub(crate) fn into_groups(self) -> Vec<(&'a str, f64, usize)> {
        self.groups
    }
}

/// Occurrence counts of `keys`, most frequent first, ties in encounter order.
pub fn count_by<'a, I>(keys: I) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut grouped = Grouped::new();
    for key in keys {
        grouped.add(key, 0.0);
    }

    let mut entries: Vec<CountEntry> = grouped
        .into_groups()
        .into_iter()
        .map(|(name, _, count)| CountEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Round to `places` decimal places, halves away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Mean FPS per GPU, best first.
pub fn gpu_performance(records: &[CanonicalRecord], top: usize) -> Vec<GpuPerformanceEntry> {
    let mut grouped = Grouped::new();
    for record in records {
        grouped.add(&record.gpu, record.avg_fps);
    }

    let mut entries: Vec<GpuPerformanceEntry> = grouped
        .into_groups()
        .into_iter()
        .filter(|&(_, _, count)| count >= 1)
        .map(|(name, total, count)| GpuPerformanceEntry {
            name: name.to_string(),
            avg_fps: round_to(total / count as f64, 2),
            sample_count: count,
        })
        .collect();
    entries.sort_by(|a, b| b.avg_fps.total_cmp(&a.avg_fps));
    entries.truncate(top);
    entries
}

pub fn cpu_frequency(records: &[CanonicalRecord], top: usize) -> Vec<CountEntry> {
    let mut entries = count_by(records.iter().map(|r| r.cpu.as_str()));
    entries.truncate(top);
    entries
}

/// Records with an empty verdict are not counted.
pub fn verdict_distribution(records: &[CanonicalRecord]) -> Vec<CountEntry> {
    count_by(
        records
            .iter()
            .map(|r| r.verdict.as_str())
            .filter(|v| !v.is_empty()),
    )
}

pub fn ray_tracing_distribution(records: &[CanonicalRecord]) -> Vec<CountEntry> {
    count_by(
        records
            .iter()
            .map(|r| or_placeholder(&r.ray_tracing, DEFAULT_RAY_TRACING)),
    )
}

pub fn resolution_distribution(records: &[CanonicalRecord], top: usize) -> Vec<CountEntry> {
    let mut entries = count_by(records.iter().map(|r| or_placeholder(&r.resolution, UNKNOWN)));
    entries.truncate(top);
    entries
}

pub fn upscaling_distribution(records: &[CanonicalRecord]) -> Vec<CountEntry> {
    count_by(
        records
            .iter()
            .map(|r| or_placeholder(&r.upscaling, DEFAULT_UPSCALING)),
    )
}

/// Index into [`FPS_RANGES`] for a value. Values falling between two
/// integer-bounded buckets (e.g. `30.5`) go to the next bucket up; negative
/// and NaN values go to the first bucket.
pub fn fps_bucket_index(fps: f64) -> usize {
    FPS_RANGES
        .iter()
        .position(|&(_, _, max)| fps <= max)
        .unwrap_or(0)
}

/// All six buckets, always in fixed order, empty ones included.
pub fn fps_ranges(records: &[CanonicalRecord]) -> Vec<FpsRangeBucket> {
    let mut counts = [0usize; FPS_RANGES.len()];
    for record in records {
        counts[fps_bucket_index(record.avg_fps)] += 1;
    }

    FPS_RANGES
        .iter()
        .zip(counts)
        .map(|(&(label, min, max), count)| FpsRangeBucket {
            range_label: label.to_string(),
            min,
            max: max.is_finite().then_some(max),
            count,
        })
        .collect()
}
