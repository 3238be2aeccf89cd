//! Summary figures and derived tables built on top of the record set and the
//! aggregate views: headline statistics, per-resolution performance,
//! percentage shares and resolution categories.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::aggregate::{gpu_performance, round_to, Grouped};
use crate::types::{CanonicalRecord, CountEntry};

/// Headline numbers for the current record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_entries: usize,
    /// Mean FPS over every record, `0.0` when empty.
    pub avg_fps: f64,
    /// Mean score over every record, `0.0` when empty.
    pub avg_score: f64,
    /// Top entry of the GPU performance view (highest mean FPS), `"N/A"`
    /// when empty.
    pub most_common_gpu: String,
}

pub fn summary_stats(records: &[CanonicalRecord]) -> SummaryStats {
    let mean = |value: fn(&CanonicalRecord) -> f64| {
        if records.is_empty() {
            0.0
        } else {
            records.iter().map(value).sum::<f64>() / records.len() as f64
        }
    };

    SummaryStats {
        total_entries: records.len(),
        avg_fps: mean(|r| r.avg_fps),
        avg_score: mean(|r| r.score),
        most_common_gpu: gpu_performance(records, 1)
            .into_iter()
            .next()
            .map(|e| e.name)
            .unwrap_or_else(|| "N/A".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Resolution performance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionPerformance {
    pub resolution: String,
    /// Mean FPS rounded to one decimal place.
    pub avg_fps: f64,
    pub sample_size: usize,
}

/// Mean FPS per non-empty resolution, keeping only resolutions with at least
/// `min_samples` records, largest sample first.
pub fn resolution_performance(
    records: &[CanonicalRecord],
    min_samples: usize,
) -> Vec<ResolutionPerformance> {
    let mut grouped = Grouped::new();
    for record in records.iter().filter(|r| !r.resolution.is_empty()) {
        grouped.add(&record.resolution, record.avg_fps);
    }

    let mut rows: Vec<ResolutionPerformance> = grouped
        .into_groups()
        .into_iter()
        .filter(|&(_, _, count)| count >= min_samples)
        .map(|(resolution, total, count)| ResolutionPerformance {
            resolution: resolution.to_string(),
            avg_fps: round_to(total / count as f64, 1),
            sample_size: count,
        })
        .collect();
    rows.sort_by(|a, b| b.sample_size.cmp(&a.sample_size));
    rows
}

static ULTRAWIDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)3440x1440|ultrawide").unwrap());
static FULL_HD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)1920x1080|1080p").unwrap());

/// `true` when the table has at least three rows and the first ultrawide row
/// averages more FPS than the first full-HD row. Usually a sign that
/// ultrawide owners run high-end hardware, not a real performance effect.
pub fn ultrawide_outperforms_full_hd(rows: &[ResolutionPerformance]) -> bool {
    if rows.len() < 3 {
        return false;
    }
    let find = |re: &Regex| rows.iter().find(|r| re.is_match(&r.resolution));

    match (find(&*ULTRAWIDE), find(&*FULL_HD)) {
        (Some(ultrawide), Some(full_hd)) => ultrawide.avg_fps > full_hd.avg_fps,
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Percentages and categories
// ---------------------------------------------------------------------------

/// A count with its share of the view total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub name: String,
    pub count: usize,
    /// Whole-number percentage of the total.
    pub percent: u32,
}

/// Attach whole-number percentages to a count view. Shares are rounded
/// individually, so they need not add up to exactly 100.
pub fn with_percentages(entries: &[CountEntry]) -> Vec<Share> {
    let total: usize = entries.iter().map(|e| e.count).sum();

    entries
        .iter()
        .map(|e| Share {
            name: e.name.clone(),
            count: e.count,
            percent: percent_of(e.count, total),
        })
        .collect()
}

fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (count as f64 / total as f64 * 100.0).round() as u32
    }
}

/// Resolution categories, first match wins; `Other` catches everything.
static RESOLUTION_CATEGORIES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("1440p", r"(?i)2560x1440|1440p"),
        ("1080p", r"(?i)1920x1080|1080p"),
        ("Ultrawide", r"(?i)3440x|ultrawide|ultra-wide|uwqhd"),
        ("4K", r"(?i)3840x2160|4k|uhd|2160p"),
        ("Other", r".*"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).unwrap()))
    .collect()
});

/// Fold a resolution count view into broad categories with percentages of
/// the view total. Empty categories are dropped; largest first.
pub fn resolution_categories(resolutions: &[CountEntry]) -> Vec<Share> {
    let mut counts = vec![0usize; RESOLUTION_CATEGORIES.len()];
    for entry in resolutions {
        if let Some(i) = RESOLUTION_CATEGORIES
            .iter()
            .position(|(_, re)| re.is_match(&entry.name))
        {
            counts[i] += entry.count;
        }
    }

    let mut categories: Vec<CountEntry> = RESOLUTION_CATEGORIES
        .iter()
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .map(|((name, _), count)| CountEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    let total: usize = resolutions.iter().map(|e| e.count).sum();
    categories
        .into_iter()
        .map(|c| Share {
            percent: percent_of(c.count, total),
            name: c.name,
            count: c.count,
        })
        .collect()
}
