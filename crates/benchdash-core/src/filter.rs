//! Record filters — the predicate behind the dashboard's filter controls.
//!
//! A filter never mutates the record set; [`RecordFilter::apply`] returns a
//! new vector that is then fed back through aggregation.

use serde::Serialize;
use std::str::FromStr;

use crate::types::CanonicalRecord;

/// GPU vendor, matched loosely against the canonical GPU name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GpuBrand {
    Nvidia,
    Amd,
    Intel,
}

impl GpuBrand {
    fn markers(self) -> &'static [&'static str] {
        match self {
            GpuBrand::Nvidia => &["NVIDIA", "RTX", "GTX"],
            GpuBrand::Amd => &["AMD", "RADEON", "RX"],
            GpuBrand::Intel => &["INTEL", "ARC"],
        }
    }

    /// Case-insensitive substring test on the GPU name.
    pub fn matches(self, gpu: &str) -> bool {
        let upper = gpu.to_uppercase();
        self.markers().iter().any(|m| upper.contains(m))
    }
}

impl std::fmt::Display for GpuBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GpuBrand::Nvidia => write!(f, "NVIDIA"),
            GpuBrand::Amd => write!(f, "AMD"),
            GpuBrand::Intel => write!(f, "Intel"),
        }
    }
}

impl FromStr for GpuBrand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nvidia" => Ok(GpuBrand::Nvidia),
            "amd" => Ok(GpuBrand::Amd),
            "intel" => Ok(GpuBrand::Intel),
            other => Err(format!("unknown GPU brand: {other} (expected nvidia, amd or intel)")),
        }
    }
}

/// Exact-match criteria; `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilter {
    pub upscaling: Option<String>,
    pub graphics_settings: Option<String>,
    pub ray_tracing: Option<String>,
    pub frame_generation: Option<String>,
    pub gpu_brand: Option<GpuBrand>,
}

/// The "no constraint" choice offered by every filter control.
pub const ALL: &str = "All";

impl RecordFilter {
    /// Map the `"All"` sentinel (or an empty choice) to `None`.
    pub fn choice(value: &str) -> Option<String> {
        match value.trim() {
            "" | ALL => None,
            v => Some(v.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &RecordFilter::default()
    }

    pub fn matches(&self, record: &CanonicalRecord) -> bool {
        fn exact(want: &Option<String>, have: &str) -> bool {
            want.as_deref().map_or(true, |w| w == have)
        }

        exact(&self.upscaling, &record.upscaling)
            && exact(&self.graphics_settings, &record.graphics_settings)
            && exact(&self.ray_tracing, &record.ray_tracing)
            && exact(&self.frame_generation, &record.frame_generation)
            && self.gpu_brand.map_or(true, |brand| brand.matches(&record.gpu))
    }

    pub fn apply(&self, records: &[CanonicalRecord]) -> Vec<CanonicalRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
