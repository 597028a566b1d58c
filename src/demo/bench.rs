// src/demo/bench.rs

//! Wall-clock benchmark of the public drawing entry points.
//!
//! Each entry point renders the configured text into its own buffer for the
//! configured number of frames. The callback path writes into a monochrome
//! buffer from a closure so that the three timings compare like with like.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::{surface_cells, BenchmarkConfig};
use crate::sinks::{draw_text, draw_text_to_mono_buffer, draw_text_to_rgb565_buffer};

/// Timing of one entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub entry_point: &'static str,
    pub iterations: u32,
    pub total: Duration,
}

impl BenchReport {
    pub fn per_frame(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        self.total / self.iterations
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: rendered {} frames in {:.2} seconds, average {:.4} ms per frame",
            self.entry_point,
            self.iterations,
            self.total.as_secs_f64(),
            self.per_frame().as_secs_f64() * 1000.0
        )
    }
}

fn time<F: FnMut()>(entry_point: &'static str, iterations: u32, mut frame: F) -> BenchReport {
    let start = Instant::now();
    for _ in 0..iterations {
        frame();
    }
    let report = BenchReport {
        entry_point,
        iterations,
        total: start.elapsed(),
    };
    debug!("{}", report);
    report
}

/// Runs every entry point and returns one report each, or none when the
/// buffers would be too large to allocate.
pub fn run(config: &BenchmarkConfig) -> Vec<BenchReport> {
    let (w, h) = (config.width, config.height);
    let Some(cells) = surface_cells(w, h) else {
        warn!("Benchmark buffer {}x{} is too large, skipping", w, h);
        return Vec::new();
    };
    let (x, y) = config.origin;
    let text = config.text.as_str();
    info!(
        "Benchmarking {:?} into {}x{} buffers, {} frames per entry point",
        text, w, h, config.iterations
    );

    let mut mono = vec![0u8; cells];
    let mut rgb = vec![0u16; cells];
    let mut via_callback = vec![0u8; cells];

    vec![
        time("draw_text (callback)", config.iterations, || {
            let mut target = |px: i32, py: i32, color: &u8| {
                if let (Ok(px), Ok(py)) = (usize::try_from(px), usize::try_from(py)) {
                    if px < w && py < h {
                        via_callback[py * w + px] = *color;
                    }
                }
            };
            black_box(draw_text(text, x, y, &mut target, config.mono_color));
        }),
        time("draw_text_to_mono_buffer", config.iterations, || {
            black_box(draw_text_to_mono_buffer(
                text,
                &mut mono,
                w,
                h,
                x,
                y,
                config.mono_color,
            ));
        }),
        time("draw_text_to_rgb565_buffer", config.iterations, || {
            black_box(draw_text_to_rgb565_buffer(
                text,
                &mut rgb,
                w,
                h,
                x,
                y,
                config.rgb565_color,
            ));
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn reports_every_entry_point() {
        let config = BenchmarkConfig {
            iterations: 3,
            ..BenchmarkConfig::default()
        };
        let reports = run(&config);
        let names: Vec<_> = reports.iter().map(|r| r.entry_point).collect();
        assert_eq!(
            names,
            vec![
                "draw_text (callback)",
                "draw_text_to_mono_buffer",
                "draw_text_to_rgb565_buffer"
            ]
        );
        assert!(reports.iter().all(|r| r.iterations == 3));
    }

    #[test_log::test]
    fn oversized_buffers_are_skipped() {
        let config = BenchmarkConfig {
            width: usize::MAX,
            height: 3,
            iterations: 1,
            ..BenchmarkConfig::default()
        };
        assert!(run(&config).is_empty());
    }

    #[test_log::test]
    fn extreme_origin_does_not_panic() {
        let config = BenchmarkConfig {
            origin: (i32::MAX - 1, i32::MIN),
            text: "A\nB".to_string(),
            iterations: 2,
            ..BenchmarkConfig::default()
        };
        assert_eq!(run(&config).len(), 3);
    }

    #[test_log::test]
    fn per_frame_divides_total() {
        let report = BenchReport {
            entry_point: "x",
            iterations: 4,
            total: Duration::from_millis(10),
        };
        assert_eq!(report.per_frame(), Duration::from_micros(2500));
        let idle = BenchReport {
            iterations: 0,
            ..report.clone()
        };
        assert_eq!(idle.per_frame(), Duration::ZERO);
        assert!(report.to_string().contains("4 frames"));
    }
}
