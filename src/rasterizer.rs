// src/rasterizer.rs

//! Scan conversion of a single glyph into pixel events.
//!
//! The rasterizer is the primitive under every drawing entry point. It walks
//! the glyph bitmap row by row (top first), left to right inside a row, and
//! reports one event per lit pixel:
//!
//! ```text
//! row byte 0b0011_0000 at origin (10, 4)
//!            ^^        -> emit(12, 4), emit(13, 4)
//! ```
//!
//! Unlit pixels never produce an event. Callers that want a background must
//! fill it themselves; text can therefore be composited over existing buffer
//! content without disturbing it.

use crate::font::{Glyph, GLYPH_WIDTH};

/// Emits `(x, y)` for every lit pixel of `glyph` placed with its top-left corner at `(origin_x, origin_y)`.
///
/// Coordinates saturate at the `i32` range, matching the layout cursor.
#[inline]
pub fn rasterize<F>(glyph: &Glyph, origin_x: i32, origin_y: i32, mut emit: F)
where
    F: FnMut(i32, i32),
{
    for (row, &bits) in glyph.rows().iter().enumerate() {
        if bits == 0 {
            continue;
        }
        let py = origin_y.saturating_add(row as i32);
        for col in 0..GLYPH_WIDTH {
            if bits & (0x80 >> col) != 0 {
                emit(origin_x.saturating_add(col), py);
            }
        }
    }
}

/// Like [`rasterize`], but clipped to a `width` x `height` surface anchored at (0, 0).
///
/// The clipping policy is the one shared by the buffer sinks:
/// - an origin outside the surface (negative included) drops the whole glyph;
/// - the first row at or past `height` ends the glyph;
/// - the first column at or past `width` ends the current row.
///
/// Emitted coordinates are therefore always inside the surface, which lets
/// callers index their buffers without further checks. Returns `false` when
/// the whole glyph was skipped.
#[inline]
pub fn rasterize_clipped<F>(
    glyph: &Glyph,
    origin_x: i32,
    origin_y: i32,
    width: usize,
    height: usize,
    mut emit: F,
) -> bool
where
    F: FnMut(usize, usize),
{
    if origin_x < 0 || origin_y < 0 {
        return false;
    }
    let (x0, y0) = (origin_x as usize, origin_y as usize);
    if x0 >= width || y0 >= height {
        return false;
    }

    for (row, &bits) in glyph.rows().iter().enumerate() {
        let py = y0 + row;
        if py >= height {
            break;
        }
        for col in 0..GLYPH_WIDTH as usize {
            let px = x0 + col;
            if px >= width {
                break;
            }
            if bits & (0x80 >> col) != 0 {
                emit(px, py);
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{self, lookup_char};
    use proptest::prelude::*;

    fn collect(glyph: &Glyph, x: i32, y: i32) -> Vec<(i32, i32)> {
        let mut pixels = Vec::new();
        rasterize(glyph, x, y, |px, py| pixels.push((px, py)));
        pixels
    }

    #[test_log::test]
    fn space_emits_nothing() {
        assert!(collect(font::space(), 0, 0).is_empty());
    }

    #[test_log::test]
    fn full_glyph_emits_all_64_pixels_in_row_major_order() {
        let full = Glyph::new([0xFF; 8]);
        let pixels = collect(&full, 3, -2);
        assert_eq!(pixels.len(), 64);
        let expected: Vec<(i32, i32)> = (0..8)
            .flat_map(|row| (0..8).map(move |col| (3 + col, -2 + row)))
            .collect();
        assert_eq!(pixels, expected);
    }

    #[test_log::test]
    fn column_zero_is_the_most_significant_bit() {
        let glyph = Glyph::new([0x80, 0x01, 0, 0, 0, 0, 0, 0]);
        assert_eq!(collect(&glyph, 10, 20), vec![(10, 20), (17, 21)]);
    }

    #[test_log::test]
    fn clipped_drops_glyph_with_negative_origin() {
        let full = Glyph::new([0xFF; 8]);
        let mut count = 0;
        assert!(!rasterize_clipped(&full, -1, 0, 16, 16, |_, _| count += 1));
        assert!(!rasterize_clipped(&full, 0, -1, 16, 16, |_, _| count += 1));
        assert!(!rasterize_clipped(&full, 16, 0, 16, 16, |_, _| count += 1));
        assert!(!rasterize_clipped(&full, 0, 16, 16, 16, |_, _| count += 1));
        assert_eq!(count, 0);
    }

    #[test_log::test]
    fn clipped_stops_at_right_and_bottom_edges() {
        let full = Glyph::new([0xFF; 8]);
        let mut pixels = Vec::new();
        assert!(rasterize_clipped(&full, 7, 5, 8, 8, |x, y| pixels.push((x, y))));
        assert_eq!(pixels, vec![(7, 5), (7, 6), (7, 7)]);
    }

    #[test_log::test]
    fn coordinates_saturate_near_the_i32_limits() {
        let full = Glyph::new([0xFF; 8]);
        let pixels = collect(&full, i32::MAX - 3, i32::MAX);
        assert_eq!(pixels.len(), 64);
        assert!(pixels.iter().all(|&(x, y)| x >= i32::MAX - 3 && y == i32::MAX));
        assert_eq!(pixels[7], (i32::MAX, i32::MAX));

        let pixels = collect(&full, i32::MIN, i32::MIN);
        assert!(pixels.iter().all(|&(x, y)| x < 0 && y < 0));
        assert_eq!(pixels[63], (i32::MIN + 7, i32::MIN + 7));
    }

    proptest! {
        #[test]
        fn emits_each_lit_bit_once_in_order(rows in any::<[u8; 8]>(), x in -100i32..100, y in -100i32..100) {
            let glyph = Glyph::new(rows);
            let pixels = collect(&glyph, x, y);
            prop_assert_eq!(pixels.len() as u32, glyph.lit_pixels());
            for &(px, py) in &pixels {
                prop_assert!(glyph.is_set((px - x) as usize, (py - y) as usize));
            }
            let mut sorted = pixels.clone();
            sorted.sort_by_key(|&(px, py)| (py, px));
            sorted.dedup();
            prop_assert_eq!(sorted, pixels);
        }

        #[test]
        fn clipped_matches_unclipped_inside_surface(ch in 32u8..127, x in 0i32..20, y in 0i32..20) {
            let glyph = lookup_char(char::from(ch));
            let (w, h) = (16usize, 12usize);
            let mut clipped = Vec::new();
            rasterize_clipped(glyph, x, y, w, h, |px, py| clipped.push((px as i32, py as i32)));
            let inside: Vec<(i32, i32)> = if (x as usize) < w && (y as usize) < h {
                collect(glyph, x, y)
                    .into_iter()
                    .filter(|&(px, py)| (px as usize) < w && (py as usize) < h)
                    .collect()
            } else {
                Vec::new()
            };
            prop_assert_eq!(clipped, inside);
        }
    }
}
