// src/config.rs

//! Configuration for the console demo and the benchmark runner.
//!
//! Settings are read from a JSON file. Every struct carries
//! `#[serde(default)]`, so a file only needs the fields it changes:
//!
//! ```json
//! { "console": { "width": 100 }, "benchmark": { "iterations": 5000 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::color::{Mono, Rgb565};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "EMBEDDED_ASCII_CONFIG";

/// Upper bound on `width * height` for any surface the demo allocates.
pub const MAX_SURFACE_CELLS: usize = 1 << 24;

/// Root of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Text-grid demo settings.
    pub console: ConsoleConfig,
    /// Benchmark settings.
    pub benchmark: BenchmarkConfig,
}

/// Settings for rendering into a character grid printed on stdout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Grid width in characters (one character per pixel).
    pub width: usize,
    /// Grid height in characters.
    pub height: usize,
    /// Text drawn first.
    pub banner: String,
    /// Top-left pixel of the banner.
    pub banner_origin: (i32, i32),
    /// Top-left pixel of the glyph table.
    pub table_origin: (i32, i32),
    /// Character printed for a lit pixel.
    pub lit: char,
    /// Character printed for an unlit pixel.
    pub unlit: char,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            width: 80,
            height: 40,
            banner: "Embedded ASCII\nLibrary v1.1".to_string(),
            banner_origin: (2, 2),
            table_origin: (2, 6),
            lit: '#',
            unlit: ' ',
        }
    }
}

/// Settings for the rendering benchmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Target buffer width in pixels.
    pub width: usize,
    /// Target buffer height in pixels.
    pub height: usize,
    /// Where the text starts.
    pub origin: (i32, i32),
    pub text: String,
    /// Frames rendered per entry point.
    pub iterations: u32,
    /// Value written into the monochrome buffer.
    pub mono_color: u8,
    /// Value written into the RGB565 buffer.
    pub rgb565_color: Rgb565,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            width: 128,
            height: 64,
            origin: (10, 10),
            text: "Benchmark: ASCII rendering".to_string(),
            iterations: 1000,
            mono_color: Mono::ON,
            rgb565_color: Rgb565::WHITE,
        }
    }
}

impl DemoConfig {
    /// Parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DemoConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Rejects surfaces the demo could not allocate.
    pub fn validate(&self) -> Result<()> {
        check_surface("console", self.console.width, self.console.height)?;
        check_surface("benchmark", self.benchmark.width, self.benchmark.height)
    }

    /// Loads from `explicit` if given, else from `$EMBEDDED_ASCII_CONFIG`, else defaults.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let path = explicit.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
        match path {
            Some(path) => {
                info!("Using config file {}", path.display());
                Self::load(&path)
            }
            None => {
                info!("No config file given, using defaults.");
                Ok(Self::default())
            }
        }
    }
}

/// Cell count of a `width` x `height` surface, or `None` past [`MAX_SURFACE_CELLS`].
///
/// An empty axis still counts as one toward the limit, since the console
/// demo emits one line per row even when rows are empty.
pub fn surface_cells(width: usize, height: usize) -> Option<usize> {
    width
        .max(1)
        .checked_mul(height.max(1))
        .filter(|&cells| cells <= MAX_SURFACE_CELLS)
        .map(|_| width * height)
}

fn check_surface(section: &str, width: usize, height: usize) -> Result<()> {
    if surface_cells(width, height).is_none() {
        anyhow::bail!(
            "{} surface {}x{} exceeds {} cells",
            section,
            width,
            height,
            MAX_SURFACE_CELLS
        );
    }
    Ok(())
}
