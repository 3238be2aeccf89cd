//! Configuration types for benchdash.
//!
//! [`Config::load`] reads `~/.config/benchdash/config.toml`, creating it with
//! the built-in defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests). The defaults reproduce the pipeline constants exactly, so a
//! missing or empty file never changes behaviour.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[header]
scan_limit     = 15
fallback_index = 7

[views]
gpu_top                = 15
cpu_top                = 10
resolution_top         = 6
resolution_min_samples = 10
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/benchdash/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub views: ViewConfig,
}

/// `[header]` section: where the header locator looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HeaderConfig {
    /// Exclusive upper bound of the scanned line window.
    #[serde(default = "default_scan_limit")]
    pub scan_limit: usize,
    /// Index used when no line in the window looks like a header.
    #[serde(default = "default_fallback_index")]
    pub fallback_index: usize,
}

fn default_scan_limit() -> usize { 15 }
fn default_fallback_index() -> usize { 7 }

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scan_limit: default_scan_limit(),
            fallback_index: default_fallback_index(),
        }
    }
}

/// `[views]` section: truncation limits of the aggregate views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_gpu_top")]
    pub gpu_top: usize,
    #[serde(default = "default_cpu_top")]
    pub cpu_top: usize,
    #[serde(default = "default_resolution_top")]
    pub resolution_top: usize,
    /// Minimum samples for a row of the resolution performance table.
    #[serde(default = "default_resolution_min_samples")]
    pub resolution_min_samples: usize,
}

fn default_gpu_top() -> usize { 15 }
fn default_cpu_top() -> usize { 10 }
fn default_resolution_top() -> usize { 6 }
fn default_resolution_min_samples() -> usize { 10 }

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            gpu_top: default_gpu_top(),
            cpu_top: default_cpu_top(),
            resolution_top: default_resolution_top(),
            resolution_min_samples: default_resolution_min_samples(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/benchdash/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on top of the built-in defaults. The
    /// file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("benchdash")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
