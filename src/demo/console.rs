// src/demo/console.rs

//! Renders text and the whole glyph table into a character grid, one grid
//! cell per pixel, through the callback sink.

use log::{debug, warn};

use crate::config::{surface_cells, ConsoleConfig};
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::sinks::{draw_char, draw_text, PixelTarget};

/// Callback context for a character grid: the backing cells and the row length.
///
/// The callback sink does not clip, so this target drops coordinates that
/// fall outside the grid itself.
pub struct ConsoleContext<'a> {
    pub buffer: &'a mut [char],
    pub width: usize,
}

impl PixelTarget<char> for ConsoleContext<'_> {
    fn put_pixel(&mut self, x: i32, y: i32, color: &char) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x >= self.width {
            return;
        }
        let Some(index) = y.checked_mul(self.width).and_then(|row| row.checked_add(x)) else {
            return;
        };
        if let Some(cell) = self.buffer.get_mut(index) {
            *cell = *color;
        }
    }
}

/// Draws the banner and the glyph table, returning the grid as text lines
/// with trailing blanks removed.
///
/// A grid too large to allocate renders as no lines at all.
pub fn render(config: &ConsoleConfig) -> Vec<String> {
    let Some(cell_count) = surface_cells(config.width, config.height) else {
        warn!(
            "Console grid {}x{} is too large, skipping demo",
            config.width, config.height
        );
        return Vec::new();
    };
    let mut cells = vec![config.unlit; cell_count];
    let mut ctx = ConsoleContext {
        buffer: &mut cells,
        width: config.width,
    };

    let (bx, by) = config.banner_origin;
    let banner_width = draw_text(&config.banner, bx, by, &mut ctx, config.lit);
    debug!("Console demo: banner last line is {} px wide", banner_width);

    // Table rows wrap before the right margin.
    let wrap_at = i32::try_from(config.width)
        .unwrap_or(i32::MAX)
        .saturating_sub(GLYPH_WIDTH + 2);
    let (start_x, mut y) = config.table_origin;
    let mut x = start_x;
    for (ch, _) in font::iter() {
        draw_char(ch, x, y, &mut ctx, config.lit);
        x = x.saturating_add(GLYPH_WIDTH);
        if x > wrap_at {
            x = start_x;
            y = y.saturating_add(GLYPH_HEIGHT);
        }
    }

    if config.width == 0 {
        return vec![String::new(); config.height];
    }
    cells
        .chunks(config.width)
        .map(|row| {
            let line: String = row.iter().collect();
            line.trim_end_matches(config.unlit).to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::lookup_char;

    #[test_log::test]
    fn context_ignores_pixels_outside_the_grid() {
        let mut cells = vec![' '; 4 * 2];
        let mut ctx = ConsoleContext {
            buffer: &mut cells,
            width: 4,
        };
        ctx.put_pixel(-1, 0, &'#');
        ctx.put_pixel(4, 0, &'#');
        ctx.put_pixel(0, 2, &'#');
        ctx.put_pixel(3, 1, &'#');
        assert_eq!(cells.iter().filter(|&&c| c == '#').count(), 1);
        assert_eq!(cells[7], '#');
    }

    #[test_log::test]
    fn banner_pixels_land_at_the_configured_origin() {
        let config = ConsoleConfig {
            banner: "H".to_string(),
            table_origin: (1000, 1000),
            ..ConsoleConfig::default()
        };
        let lines = render(&config);
        assert_eq!(lines.len(), config.height);

        let glyph = lookup_char('H');
        for row in 0..8 {
            let line: Vec<char> = lines[2 + row].chars().collect();
            for col in 0..8 {
                let lit = line.get(2 + col) == Some(&'#');
                assert_eq!(lit, glyph.is_set(col, row), "row {row} col {col}");
            }
        }
    }

    #[test_log::test]
    fn default_demo_fits_the_grid() {
        let config = ConsoleConfig::default();
        let lines = render(&config);
        assert_eq!(lines.len(), 40);
        assert!(lines.iter().all(|line| line.chars().count() <= 80));
        assert!(lines.iter().any(|line| line.contains('#')));
        // Top margin above the banner stays blank.
        assert!(lines[0].is_empty() && lines[1].is_empty());
    }

    #[test_log::test]
    fn table_origin_near_the_i32_limit_stays_off_grid() {
        let banner_only = render(&ConsoleConfig {
            table_origin: (1000, 1000),
            ..ConsoleConfig::default()
        });
        for table_origin in [(i32::MAX - 4, 0), (0, i32::MAX - 4), (i32::MAX, i32::MAX)] {
            let config = ConsoleConfig {
                table_origin,
                ..ConsoleConfig::default()
            };
            assert_eq!(render(&config), banner_only, "table at {table_origin:?}");
        }
    }

    #[test_log::test]
    fn huge_grid_renders_nothing() {
        let config = ConsoleConfig {
            width: usize::MAX,
            height: 2,
            ..ConsoleConfig::default()
        };
        assert!(render(&config).is_empty());

        let config = ConsoleConfig {
            width: 0,
            height: usize::MAX,
            ..ConsoleConfig::default()
        };
        assert!(render(&config).is_empty());
    }

    #[test_log::test]
    fn zero_width_grid_is_blank() {
        let config = ConsoleConfig {
            width: 0,
            height: 3,
            ..ConsoleConfig::default()
        };
        assert_eq!(render(&config), vec![String::new(); 3]);
    }
}
