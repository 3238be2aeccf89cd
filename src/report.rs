//! The assembled dashboard document: every view for one ingestion, ready to
//! serialise.

use chrono::{DateTime, Utc};
use serde::Serialize;

use benchdash_core::detail::{gpu_detail, GpuDetail};
use benchdash_core::summary::{
    resolution_categories, resolution_performance, summary_stats, ultrawide_outperforms_full_hd,
    ResolutionPerformance, Share, SummaryStats,
};
use benchdash_core::{aggregate_with, AggregateViews, Dataset, RecordFilter, ViewConfig};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub header_index: usize,
    pub header_fallback: bool,
    pub skipped_rows: usize,
    /// Records ingested before filtering.
    pub total_records: usize,
    pub filter: RecordFilter,
    pub summary: SummaryStats,
    pub views: AggregateViews,
    pub resolution_performance: Vec<ResolutionPerformance>,
    pub ultrawide_anomaly: bool,
    pub resolution_categories: Vec<Share>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_detail: Option<GpuDetail>,
}

impl Report {
    /// Filter `dataset`, aggregate what is left and stamp the result with the
    /// current time.
    pub fn build(
        dataset: &Dataset,
        filter: &RecordFilter,
        limits: &ViewConfig,
        gpu: Option<&str>,
    ) -> Self {
        Self::at(dataset, filter, limits, gpu, Utc::now())
    }

    pub fn at(
        dataset: &Dataset,
        filter: &RecordFilter,
        limits: &ViewConfig,
        gpu: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        let records = filter.apply(&dataset.records);
        let views = aggregate_with(&records, limits);
        let resolution_rows = resolution_performance(&records, limits.resolution_min_samples);

        tracing::debug!(
            before = dataset.records.len(),
            after = records.len(),
            "filter applied"
        );

        Self {
            source: dataset.source.clone(),
            generated_at: now,
            header_index: dataset.header_index,
            header_fallback: dataset.header_fallback,
            skipped_rows: dataset.skipped_rows,
            total_records: dataset.records.len(),
            filter: filter.clone(),
            summary: summary_stats(&records),
            ultrawide_anomaly: ultrawide_outperforms_full_hd(&resolution_rows),
            resolution_categories: resolution_categories(&views.resolutions),
            resolution_performance: resolution_rows,
            gpu_detail: gpu.map(|name| gpu_detail(&records, name)),
            views,
        }
    }

    /// Short plain-text digest of the headline numbers.
    pub fn summary_text(&self) -> String {
        let mut out = format!(
            "source: {}\nrecords: {} of {} ({} skipped)\navg fps: {:.1}\navg score: {:.0}\nmost common gpu: {}\n",
            self.source,
            self.summary.total_entries,
            self.total_records,
            self.skipped_rows,
            self.summary.avg_fps,
            self.summary.avg_score,
            self.summary.most_common_gpu,
        );
        out.push_str("fps ranges:\n");
        for bucket in &self.views.fps_ranges {
            out.push_str(&format!("  {:>8}  {}\n", bucket.range_label, bucket.count));
        }
        out
    }
}
