// src/metrics.rs

//! Size of rendered text, computed without drawing anything.
//!
//! Line splitting follows [`crate::layout`]: `'\n'` starts a new line and a
//! NUL ends the text.

use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::layout::layout_cursor;

/// Width and height of a block of text in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// Width of the widest line.
pub fn text_width(text: &str) -> u32 {
    text_size(text).width
}

/// `GLYPH_HEIGHT` per line, where the line count is one plus the number of
/// newlines. A trailing newline therefore adds an (empty) line.
pub fn text_height(text: &str) -> u32 {
    text_size(text).height
}

/// Both dimensions in a single layout pass at the origin.
pub fn text_size(text: &str) -> TextSize {
    let mut width = 0u32;
    let end = layout_cursor(text, 0, 0, |_, x, _| {
        width = width.max(x.saturating_add(GLYPH_WIDTH).unsigned_abs());
    });

    TextSize {
        width,
        height: end.y.saturating_add(GLYPH_HEIGHT).unsigned_abs(),
    }
}
