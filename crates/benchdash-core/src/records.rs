//! Record builder — turns data lines into [`CanonicalRecord`]s using the
//! column positions found in the header row.
//!
//! Only GPU and CPU Model are mandatory. A row is dropped silently when it is
//! blank, too short to reach either mandatory column, or has an empty GPU or
//! CPU cell. Every other defect defaults the affected field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::canon::{canonicalize_cpu, canonicalize_gpu, canonicalize_upscaling, canonicalize_verdict};
use crate::error::IngestError;
use crate::tokenizer::tokenize;
use crate::types::{CanonicalRecord, DEFAULT_FRAME_GENERATION, DEFAULT_RAY_TRACING};

/// The closed set of recognised header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Gpu,
    CpuModel,
    AverageFps,
    Score,
    RayTracing,
    Upscaling,
    ScreenResolution,
    GraphicsSettings,
    FrameGeneration,
    Verdict,
}

impl Column {
    pub const COUNT: usize = 10;

    pub const ALL: [Column; Column::COUNT] = [
        Column::Gpu,
        Column::CpuModel,
        Column::AverageFps,
        Column::Score,
        Column::RayTracing,
        Column::Upscaling,
        Column::ScreenResolution,
        Column::GraphicsSettings,
        Column::FrameGeneration,
        Column::Verdict,
    ];

    /// Exact header text of the column.
    pub fn header(self) -> &'static str {
        match self {
            Column::Gpu => "GPU",
            Column::CpuModel => "CPU Model",
            Column::AverageFps => "Average FPS Score",
            Column::Score => "Score",
            Column::RayTracing => "Ray Tracing",
            Column::Upscaling => "Upscaling",
            Column::ScreenResolution => "Screen Resolution",
            Column::GraphicsSettings => "Graphics Settings",
            Column::FrameGeneration => "Frame Generation",
            Column::Verdict => "Verdict",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// Position of each recognised column in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [Option<usize>; Column::COUNT],
}

impl ColumnIndex {
    /// Resolve positions by exact match against the trimmed header fields.
    /// The first occurrence of a duplicated header wins.
    pub fn resolve(header_line: &str) -> Self {
        let fields: Vec<String> = tokenize(header_line)
            .into_iter()
            .map(|f| f.trim().to_string())
            .collect();

        let mut positions = [None; Column::COUNT];
        for (slot, column) in positions.iter_mut().zip(Column::ALL) {
            *slot = fields.iter().position(|f| f == column.header());
        }
        Self { positions }
    }

    pub fn get(&self, column: Column) -> Option<usize> {
        self.positions[column as usize]
    }
}

/// Builds records from data lines once the header has been resolved.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    columns: ColumnIndex,
    gpu: usize,
    cpu: usize,
}

impl RecordBuilder {
    /// Fails with [`IngestError::MissingRequiredColumns`] when GPU or CPU
    /// Model is absent from the header line.
    pub fn from_header(header_line: &str, header_index: usize) -> Result<Self, IngestError> {
        let columns = ColumnIndex::resolve(header_line);

        match (columns.get(Column::Gpu), columns.get(Column::CpuModel)) {
            (Some(gpu), Some(cpu)) => Ok(Self { columns, gpu, cpu }),
            (gpu, cpu) => {
                let mut missing = Vec::new();
                if gpu.is_none() {
                    missing.push(Column::Gpu.header());
                }
                if cpu.is_none() {
                    missing.push(Column::CpuModel.header());
                }
                Err(IngestError::MissingRequiredColumns {
                    header_index,
                    missing,
                })
            }
        }
    }

    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    /// Build one record, or `None` when the row is noise.
    pub fn build(&self, line: &str) -> Option<CanonicalRecord> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let fields = tokenize(line);
        if fields.len() <= self.gpu || fields.len() <= self.cpu {
            return None;
        }

        let gpu = fields[self.gpu].trim();
        let cpu = fields[self.cpu].trim();
        if gpu.is_empty() || cpu.is_empty() {
            return None;
        }

        let cell = |column: Column| cell_text(&fields, self.columns.get(column));

        let verdict = match cell(Column::Verdict) {
            "" => String::new(),
            value => canonicalize_verdict(value),
        };

        Some(CanonicalRecord {
            gpu: canonicalize_gpu(gpu),
            cpu: canonicalize_cpu(cpu),
            resolution: cell(Column::ScreenResolution).to_string(),
            graphics_settings: cell(Column::GraphicsSettings).to_string(),
            ray_tracing: or_default(cell(Column::RayTracing), DEFAULT_RAY_TRACING),
            frame_generation: or_default(cell(Column::FrameGeneration), DEFAULT_FRAME_GENERATION),
            upscaling: canonicalize_upscaling(cell(Column::Upscaling)),
            avg_fps: parse_number(cell(Column::AverageFps)),
            score: parse_number(cell(Column::Score)),
            verdict,
        })
    }
}

fn cell_text(fields: &[String], position: Option<usize>) -> &str {
    position
        .and_then(|i| fields.get(i))
        .map(|f| f.trim())
        .unwrap_or("")
}

fn or_default(value: &str, default: &str) -> String {
    let value = if value.is_empty() { default } else { value };
    value.to_string()
}

/// Records plus the count of non-blank lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltRecords {
    pub records: Vec<CanonicalRecord>,
    pub skipped: usize,
}

/// Build records from every line after `header_index`.
pub fn build_records<S: AsRef<str>>(
    lines: &[S],
    header_index: usize,
) -> Result<Vec<CanonicalRecord>, IngestError> {
    build_records_counted(lines, header_index).map(|built| built.records)
}

/// Like [`build_records`], also counting dropped rows.
pub fn build_records_counted<S: AsRef<str>>(
    lines: &[S],
    header_index: usize,
) -> Result<BuiltRecords, IngestError> {
    let header_line = lines.get(header_index).map(|l| l.as_ref()).unwrap_or("");
    let builder = RecordBuilder::from_header(header_line, header_index)?;

    let mut built = BuiltRecords::default();
    for (offset, line) in lines.iter().skip(header_index + 1).enumerate() {
        let line = line.as_ref();
        match builder.build(line) {
            Some(record) => built.records.push(record),
            None if line.trim().is_empty() => {}
            None => {
                tracing::debug!(line = header_index + 1 + offset, "skipping row without GPU/CPU");
                built.skipped += 1;
            }
        }
    }

    Ok(built)
}

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap()
});

/// Parse the leading decimal number of a cell, ignoring any trailing unit
/// (`"120.5 fps"` → `120.5`). Unparsable, non-finite and negative values
/// become `0.0`.
pub fn parse_number(cell: &str) -> f64 {
    LEADING_NUMBER
        .find(cell.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}
