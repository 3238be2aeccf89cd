//! Ingestion throughput benchmarks.
//!
//! Measures the text-to-records path: tokenizing, header discovery, record
//! building and canonicalization. Ingestion reruns on every refresh of the
//! export, so it should stay linear in the number of rows.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `tokenize` | Quote-aware splitting of one line |
//! | `canonicalize` | GPU rule cascade on matched, family and passthrough names |
//! | `ingest` | Whole exports of 100, 1 000 and 10 000 rows |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench ingest_bench
//! open target/criterion/report/index.html
//! ```

use std::hint::black_box;

use benchdash_core::canon::canonicalize_gpu;
use benchdash_core::ingest;
use benchdash_core::tokenizer::tokenize;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const HEADER: &str = "GPU,CPU Model,Average FPS Score,Score,Ray Tracing,Upscaling,Screen Resolution,Graphics Settings,Frame Generation,Verdict";

fn export(rows: usize) -> String {
    const GPUS: &[&str] = &[
        "MSI RTX 4070 Ti SUPER Gaming",
        "Sapphire RX 7800 XT",
        "NVIDIA GeForce GTX 1660",
        "Intel Arc B580",
        "\"ASUS RTX 4090, OC\"",
    ];
    let mut out = format!("Instructions\n{HEADER}\n");
    for i in 0..rows {
        out.push_str(&format!(
            "{},AMD Ryzen 7 7800X3D,{}.5,{},High,DLSS 3,2560x1440,Ultra,Enabled,excellent.\n",
            GPUS[i % GPUS.len()],
            30 + i % 150,
            9000 + i,
        ));
    }
    out
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

fn tokenize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Elements(1));

    let plain = "RTX 4090,Intel Core i9-13900K,120.5,9500,High,DLSS,2560x1440,Ultra,Enabled,Excellent";
    let quoted = "\"ASUS RTX 4090, OC\",\"Intel Core i9-13900K\",\"120.5\",9500,High,DLSS,2560x1440,Ultra,Enabled,\"Great, no stutter\"";

    group.bench_with_input(BenchmarkId::new("plain", ""), &plain, |b, line| {
        b.iter(|| tokenize(black_box(line)))
    });
    group.bench_with_input(BenchmarkId::new("quoted", ""), &quoted, |b, line| {
        b.iter(|| tokenize(black_box(line)))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Canonicalization
// ---------------------------------------------------------------------------

fn canonicalize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    group.throughput(Throughput::Elements(1));

    for (label, name) in [
        ("first_rule", "RTX 5090"),
        ("deep_rule", "Intel Arc A310"),
        ("family", "NVIDIA GeForce GTX 1080"),
        ("passthrough", "Some Integrated Graphics"),
    ] {
        group.bench_with_input(BenchmarkId::new("gpu", label), &name, |b, name| {
            b.iter(|| canonicalize_gpu(black_box(name)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Whole exports
// ---------------------------------------------------------------------------

fn ingest_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");

    for rows in [100usize, 1_000, 10_000] {
        let text = export(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| ingest(black_box(text), "bench").map(|d| d.records.len()))
        });
    }

    group.finish();
}

criterion_group!(benches, tokenize_bench, canonicalize_bench, ingest_bench);
criterion_main!(benches);
