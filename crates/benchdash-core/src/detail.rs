//! Per-GPU drill-down: which CPUs a GPU was tested with and how it fared.

use serde::Serialize;
use std::collections::HashMap;

use crate::aggregate::round_to;
use crate::types::CanonicalRecord;

/// One tested configuration of a GPU/CPU pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConfiguration {
    pub resolution: String,
    pub graphics_settings: String,
    pub ray_tracing: String,
    pub upscaling: String,
    pub frame_generation: String,
    pub avg_fps: f64,
    pub score: f64,
}

impl From<&CanonicalRecord> for TestConfiguration {
    fn from(r: &CanonicalRecord) -> Self {
        Self {
            resolution: r.resolution.clone(),
            graphics_settings: r.graphics_settings.clone(),
            ray_tracing: r.ray_tracing.clone(),
            upscaling: r.upscaling.clone(),
            frame_generation: r.frame_generation.clone(),
            avg_fps: r.avg_fps,
            score: r.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuPairing {
    pub cpu: String,
    pub sample_count: usize,
    /// Mean FPS rounded to two decimal places.
    pub avg_fps: f64,
    /// Mean score rounded to two decimal places.
    pub avg_score: f64,
    /// Configurations in input order.
    pub settings: Vec<TestConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuDetail {
    pub gpu: String,
    /// Best-performing CPU first.
    pub cpus: Vec<CpuPairing>,
}

/// Break down the records of one canonical GPU by CPU. An unknown GPU gives
/// an empty breakdown, not an error.
pub fn gpu_detail(records: &[CanonicalRecord], gpu: &str) -> GpuDetail {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut cpus: Vec<CpuPairing> = Vec::new();

    for record in records.iter().filter(|r| r.gpu == gpu) {
        let slot = *slots.entry(record.cpu.as_str()).or_insert_with(|| {
            cpus.push(CpuPairing {
                cpu: record.cpu.clone(),
                sample_count: 0,
                avg_fps: 0.0,
                avg_score: 0.0,
                settings: Vec::new(),
            });
            cpus.len() - 1
        });
        let pairing = &mut cpus[slot];
        pairing.sample_count += 1;
        pairing.avg_fps += record.avg_fps;
        pairing.avg_score += record.score;
        pairing.settings.push(TestConfiguration::from(record));
    }

    for pairing in &mut cpus {
        let n = pairing.sample_count as f64;
        pairing.avg_fps = round_to(pairing.avg_fps / n, 2);
        pairing.avg_score = round_to(pairing.avg_score / n, 2);
    }
    cpus.sort_by(|a, b| b.avg_fps.total_cmp(&a.avg_fps));

    GpuDetail {
        gpu: gpu.to_string(),
        cpus,
    }
}
