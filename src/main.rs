// src/main.rs

//! Console demo and benchmark for the embedded ASCII renderer.
//!
//! Usage: `embedded-ascii [CONFIG.json]`. Without an argument the config path
//! is taken from `EMBEDDED_ASCII_CONFIG`, and built-in defaults apply when
//! neither is set.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::info;

use embedded_ascii::config::DemoConfig;
use embedded_ascii::demo::{bench, console};

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting embedded-ascii demo...");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::resolve(config_path).context("Failed to load configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    info!(
        "Rendering console demo into a {}x{} grid",
        config.console.width, config.console.height
    );
    for line in console::render(&config.console) {
        writeln!(out, "{}", line).context("Failed to write console demo to stdout")?;
    }

    for report in bench::run(&config.benchmark) {
        writeln!(out, "{}", report).context("Failed to write benchmark report to stdout")?;
    }
    out.flush().context("Failed to flush stdout")?;

    info!("embedded-ascii demo finished.");
    Ok(())
}
