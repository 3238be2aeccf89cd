//! Test builders — ergonomic constructors for records and CSV exports.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use benchdash_core::CanonicalRecord;

use super::fixtures::HEADER;

// ---------------------------------------------------------------------------
// RecordFixture
// ---------------------------------------------------------------------------

/// Fluent builder for already-canonical [`CanonicalRecord`] fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordFixture::new("RTX 4090", "Ryzen 7 7800X3D")
///     .fps(142.0)
///     .resolution("2560x1440")
///     .upscaling("DLSS")
///     .build();
/// ```
pub struct RecordFixture {
    record: CanonicalRecord,
}

impl RecordFixture {
    pub fn new(gpu: impl Into<String>, cpu: impl Into<String>) -> Self {
        Self {
            record: CanonicalRecord {
                gpu: gpu.into(),
                cpu: cpu.into(),
                ..Default::default()
            },
        }
    }

    pub fn fps(mut self, fps: f64) -> Self {
        self.record.avg_fps = fps;
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.record.score = score;
        self
    }

    pub fn resolution(mut self, resolution: impl Into<String>) -> Self {
        self.record.resolution = resolution.into();
        self
    }

    pub fn graphics(mut self, graphics: impl Into<String>) -> Self {
        self.record.graphics_settings = graphics.into();
        self
    }

    pub fn ray_tracing(mut self, ray_tracing: impl Into<String>) -> Self {
        self.record.ray_tracing = ray_tracing.into();
        self
    }

    pub fn frame_gen(mut self, frame_gen: impl Into<String>) -> Self {
        self.record.frame_generation = frame_gen.into();
        self
    }

    pub fn upscaling(mut self, upscaling: impl Into<String>) -> Self {
        self.record.upscaling = upscaling.into();
        self
    }

    pub fn verdict(mut self, verdict: impl Into<String>) -> Self {
        self.record.verdict = verdict.into();
        self
    }

    pub fn build(self) -> CanonicalRecord {
        self.record
    }
}

/// `count` copies of the same record.
pub fn repeat(record: &CanonicalRecord, count: usize) -> Vec<CanonicalRecord> {
    std::iter::repeat(record.clone()).take(count).collect()
}

// ---------------------------------------------------------------------------
// ExportBuilder
// ---------------------------------------------------------------------------

/// Builds CSV export text: an instruction row, optional preamble lines, a
/// header (the standard one unless overridden) and raw data rows.
pub struct ExportBuilder {
    preamble: Vec<String>,
    header: String,
    rows: Vec<String>,
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self {
            preamble: Vec::new(),
            header: HEADER.to_string(),
            rows: Vec::new(),
        }
    }

    /// Extra lines between the instruction row and the header.
    pub fn preamble(mut self, line: impl Into<String>) -> Self {
        self.preamble.push(line.into());
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn row(mut self, row: impl Into<String>) -> Self {
        self.rows.push(row.into());
        self
    }

    /// Data row in standard column order.
    #[allow(clippy::too_many_arguments)]
    pub fn run(
        self,
        gpu: &str,
        cpu: &str,
        fps: &str,
        score: &str,
        ray_tracing: &str,
        upscaling: &str,
        resolution: &str,
        verdict: &str,
    ) -> Self {
        self.row(format!(
            "{gpu},{cpu},{fps},{score},{ray_tracing},{upscaling},{resolution},High,Disabled,{verdict}"
        ))
    }

    pub fn build(self) -> String {
        let mut lines = vec!["Please fill in one row per benchmark run".to_string()];
        lines.extend(self.preamble);
        lines.push(self.header);
        lines.extend(self.rows);
        lines.join("\n")
    }

    /// Line index the header will land on.
    pub fn header_index(&self) -> usize {
        1 + self.preamble.len()
    }
}
