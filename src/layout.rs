// src/layout.rs

//! Fixed-pitch text layout.
//!
//! Layout walks a string with a cursor that starts at `(start_x, start_y)`.
//! Every character other than `'\n'` is reported at the current cursor, then
//! the cursor moves right by one glyph width. A `'\n'` moves the cursor down
//! one glyph height and back to `start_x`. A NUL character ends the scan the
//! same way the end of the input does. Lines are never wrapped.

use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// The pen position while laying out text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    start_x: i32,
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    pub fn new(start_x: i32, start_y: i32) -> Self {
        Self {
            start_x,
            x: start_x,
            y: start_y,
        }
    }

    /// Moves one cell to the right.
    #[inline]
    pub fn advance(&mut self) {
        self.x = self.x.saturating_add(GLYPH_WIDTH);
    }

    /// Carriage return plus line feed.
    #[inline]
    pub fn new_line(&mut self) {
        self.x = self.start_x;
        self.y = self.y.saturating_add(GLYPH_HEIGHT);
    }

    /// Distance from the line start to the cursor.
    pub fn line_width(&self) -> u32 {
        self.x.abs_diff(self.start_x)
    }
}

/// Lays out `text` starting at `(start_x, start_y)`.
///
/// `on_glyph(ch, x, y)` runs once per non-newline character. Returns the width
/// of the last line in pixels, measured from `start_x`.
pub fn layout<F>(text: &str, start_x: i32, start_y: i32, on_glyph: F) -> u32
where
    F: FnMut(char, i32, i32),
{
    layout_cursor(text, start_x, start_y, on_glyph).line_width()
}

/// Like [`layout`], but hands back the cursor where the scan stopped.
pub(crate) fn layout_cursor<F>(text: &str, start_x: i32, start_y: i32, on_glyph: F) -> Cursor
where
    F: FnMut(char, i32, i32),
{
    layout_chars(text.chars(), start_x, start_y, on_glyph)
}

/// Byte-oriented [`layout`]: every byte is one character code.
///
/// Suited to C-style buffers; bytes outside printable ASCII render as space.
pub fn layout_bytes<F>(text: &[u8], start_x: i32, start_y: i32, on_glyph: F) -> u32
where
    F: FnMut(char, i32, i32),
{
    layout_chars(text.iter().map(|&b| char::from(b)), start_x, start_y, on_glyph).line_width()
}

fn layout_chars<I, F>(chars: I, start_x: i32, start_y: i32, mut on_glyph: F) -> Cursor
where
    I: IntoIterator<Item = char>,
    F: FnMut(char, i32, i32),
{
    let mut cursor = Cursor::new(start_x, start_y);
    for ch in chars {
        match ch {
            '\0' => break,
            '\n' => cursor.new_line(),
            _ => {
                on_glyph(ch, cursor.x, cursor.y);
                cursor.advance();
            }
        }
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(text: &str, x: i32, y: i32) -> (Vec<(char, i32, i32)>, u32) {
        let mut seen = Vec::new();
        let width = layout(text, x, y, |ch, px, py| seen.push((ch, px, py)));
        (seen, width)
    }

    #[test_log::test]
    fn empty_text_emits_nothing() {
        assert_eq!(positions("", 5, 5), (vec![], 0));
    }

    #[test_log::test]
    fn single_line_advances_by_glyph_width() {
        let (seen, width) = positions("AB", 3, 4);
        assert_eq!(seen, vec![('A', 3, 4), ('B', 11, 4)]);
        assert_eq!(width, 16);
    }

    #[test_log::test]
    fn newline_resets_x_and_moves_down() {
        let (seen, width) = positions("AB\nC", 10, 0);
        assert_eq!(seen, vec![('A', 10, 0), ('B', 18, 0), ('C', 10, 8)]);
        // Width of the last line only.
        assert_eq!(width, 8);
    }

    #[test_log::test]
    fn trailing_newline_reports_zero_width() {
        let (seen, width) = positions("ABC\n", 0, 0);
        assert_eq!(seen.len(), 3);
        assert_eq!(width, 0);
    }

    #[test_log::test]
    fn nul_terminates_the_scan() {
        let (seen, width) = positions("AB\0CD", 0, 0);
        assert_eq!(seen, vec![('A', 0, 0), ('B', 8, 0)]);
        assert_eq!(width, 16);
    }

    #[test_log::test]
    fn non_ascii_char_takes_one_cell() {
        let (seen, width) = positions("aé", 0, 0);
        assert_eq!(seen, vec![('a', 0, 0), ('é', 8, 0)]);
        assert_eq!(width, 16);
    }

    #[test_log::test]
    fn byte_layout_treats_each_byte_as_a_cell() {
        let mut seen = Vec::new();
        let width = layout_bytes(b"A\xFFB\nC\0D", -4, 2, |ch, x, y| seen.push((ch, x, y)));
        assert_eq!(
            seen,
            vec![('A', -4, 2), ('\u{FF}', 4, 2), ('B', 12, 2), ('C', -4, 10)]
        );
        assert_eq!(width, 8);
    }

    #[test_log::test]
    fn final_cursor_sits_after_the_last_glyph() {
        let cursor = layout_cursor("AB\nC\n\0D", 4, 2, |_, _, _| {});
        assert_eq!((cursor.x, cursor.y), (4, 18));
        let cursor = layout_cursor("AB\nC", 4, 2, |_, _, _| {});
        assert_eq!((cursor.x, cursor.y), (12, 10));
        assert_eq!(cursor.line_width(), 8);
    }

    #[test_log::test]
    fn cursor_line_width_handles_negative_start() {
        let mut cursor = Cursor::new(-16, 0);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.x, 0);
        assert_eq!(cursor.line_width(), 16);
        cursor.new_line();
        assert_eq!((cursor.x, cursor.y), (-16, 8));
    }
}
