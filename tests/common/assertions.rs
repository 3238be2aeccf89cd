//! Domain-specific assertion macros for benchdash harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which view or record was wrong.

use benchdash_core::{AggregateViews, CountEntry};

// ---------------------------------------------------------------------------
// View assertions
// ---------------------------------------------------------------------------

/// Assert the `(name, count)` pairs of a count view, in order.
///
/// ```rust
/// assert_counts!(views.upscaling, [("DLSS", 2), ("None", 1)]);
/// ```
#[macro_export]
macro_rules! assert_counts {
    ($view:expr, [$(($name:expr, $count:expr)),* $(,)?]) => {{
        let actual: Vec<(String, usize)> = $view
            .iter()
            .map(|e: &benchdash_core::CountEntry| (e.name.clone(), e.count))
            .collect();
        let expected: Vec<(String, usize)> = vec![$(($name.to_string(), $count)),*];
        pretty_assertions::assert_eq!(actual, expected, "count view mismatch");
    }};
}

/// Assert the per-bucket counts of the FPS histogram, in bucket order.
///
/// ```rust
/// assert_buckets!(views, [0, 0, 0, 1, 0, 0]);
/// ```
#[macro_export]
macro_rules! assert_buckets {
    ($views:expr, $counts:expr) => {{
        let views: &benchdash_core::AggregateViews = &$views;
        let actual: Vec<usize> = views.fps_ranges.iter().map(|b| b.count).collect();
        let expected: Vec<usize> = $counts.to_vec();
        pretty_assertions::assert_eq!(
            actual,
            expected,
            "fps bucket counts mismatch (labels: {:?})",
            views.fps_ranges.iter().map(|b| b.range_label.as_str()).collect::<Vec<_>>()
        );
    }};
}

/// Assert selected fields of a record.
///
/// ```rust
/// assert_record!(dataset.records[0], gpu: "RTX 4090", cpu: "Core i9-13900K");
/// ```
#[macro_export]
macro_rules! assert_record {
    ($record:expr, $($field:ident : $value:expr),+ $(,)?) => {{
        let record: &benchdash_core::CanonicalRecord = &$record;
        $(
            pretty_assertions::assert_eq!(
                record.$field,
                $value,
                "field `{}` of record {:?}",
                stringify!($field),
                record
            );
        )+
    }};
}

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Total of a count view.
pub fn total(view: &[CountEntry]) -> usize {
    view.iter().map(|e| e.count).sum()
}

/// Sum of all FPS bucket counts.
pub fn bucket_total(views: &AggregateViews) -> usize {
    views.fps_ranges.iter().map(|b| b.count).sum()
}

/// Panic unless `view` is sorted by count descending.
pub fn assert_sorted_desc(view: &[CountEntry]) {
    for pair in view.windows(2) {
        assert!(
            pair[0].count >= pair[1].count,
            "view not sorted descending at {:?} / {:?}",
            pair[0],
            pair[1]
        );
    }
}
