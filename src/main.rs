use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use benchdash::pipeline::{ingest_with, Config};
use benchdash::feeds::{self, Feed, FileFeed};
use benchdash::{GpuBrand, RecordFilter, Report};

#[derive(Parser)]
#[command(name = "benchdash", about = "Benchmark dashboard — aggregate GPU/CPU benchmark CSV exports")]
struct Cli {
    /// CSV export to read; `-` or absent reads stdin.
    input: Option<PathBuf>,

    /// Identifier reported in the output (defaults to the path or `stdin`).
    #[arg(long)]
    source: Option<String>,

    /// Config file to use instead of ~/.config/benchdash/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level to stderr (RUST_LOG takes precedence).
    #[arg(long)]
    debug: bool,

    /// Keep only records with this upscaling technology.
    #[arg(long)]
    upscaling: Option<String>,

    /// Keep only records with this graphics preset.
    #[arg(long)]
    graphics: Option<String>,

    /// Keep only records with this ray tracing level.
    #[arg(long)]
    ray_tracing: Option<String>,

    /// Keep only records with this frame generation setting.
    #[arg(long)]
    frame_gen: Option<String>,

    /// Keep only GPUs of one brand: all, nvidia, amd or intel.
    #[arg(long, default_value = "all")]
    brand: String,

    /// Add the per-CPU breakdown of this canonical GPU.
    #[arg(long)]
    gpu: Option<String>,

    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Print a short plain-text digest instead of JSON.
    #[arg(long, conflicts_with = "compact")]
    summary: bool,
}

impl Cli {
    fn filter(&self) -> anyhow::Result<RecordFilter> {
        let choice = |value: &Option<String>| value.as_deref().and_then(RecordFilter::choice);
        let gpu_brand = match RecordFilter::choice(&self.brand) {
            Some(brand) if !brand.eq_ignore_ascii_case("all") => {
                Some(brand.parse::<GpuBrand>().map_err(anyhow::Error::msg)?)
            }
            _ => None,
        };

        Ok(RecordFilter {
            upscaling: choice(&self.upscaling),
            graphics_settings: choice(&self.graphics),
            ray_tracing: choice(&self.ray_tracing),
            frame_generation: choice(&self.frame_gen),
            gpu_brand,
        })
    }

    fn read_input(&self) -> anyhow::Result<(String, String)> {
        let mut feed: Box<dyn Feed> = match &self.input {
            Some(path) if path.as_os_str() != "-" => Box::new(FileFeed::new(path)),
            _ => Box::new(feeds::stdin()),
        };
        let text = feed.read_text()?;
        let source = self
            .source
            .clone()
            .unwrap_or_else(|| feed.source_id().to_string());
        Ok((text, source))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load user config, using defaults");
            Config::defaults()
        }),
    };

    let filter = cli.filter()?;
    let (text, source) = cli.read_input()?;
    let dataset = ingest_with(&text, &source, &config.header)?;
    let report = Report::build(&dataset, &filter, &config.views, cli.gpu.as_deref());

    if cli.summary {
        print!("{}", report.summary_text());
        return Ok(());
    }

    let json = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{json}");

    Ok(())
}
