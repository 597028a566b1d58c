// src/font.rs

//! The built-in 8x8 ASCII glyph table.
//!
//! Every printable ASCII character (codes 32 through 126) has exactly one
//! [`Glyph`]. The table is a `static`, so lookups never allocate, never lock
//! and can be performed from any number of threads at once.
//!
//! Codes outside the printable range are not an error: they resolve to the
//! space glyph, which has no pixels set.

mod table;

use table::GLYPHS;

/// Width of every glyph in pixels.
pub const GLYPH_WIDTH: i32 = 8;
/// Height of every glyph in pixels.
pub const GLYPH_HEIGHT: i32 = 8;

/// First character code present in the table (space).
pub const FIRST_CODE: i64 = 32;
/// Last character code present in the table (`~`).
pub const LAST_CODE: i64 = 126;
/// Number of glyphs in the table.
pub const GLYPH_COUNT: usize = (LAST_CODE - FIRST_CODE + 1) as usize;

const _: () = assert!(GLYPH_WIDTH == u8::BITS as i32, "one byte must hold one glyph row");

/// An immutable 8x8 monochrome bitmap.
///
/// One byte per row, row 0 at the top. Within a row the most significant bit
/// is the leftmost pixel (column 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT as usize],
}

impl Glyph {
    pub const fn new(rows: [u8; GLYPH_HEIGHT as usize]) -> Self {
        Self { rows }
    }

    /// Raw row bytes, top row first.
    pub const fn rows(&self) -> &[u8; GLYPH_HEIGHT as usize] {
        &self.rows
    }

    /// Whether the pixel at `(col, row)` is lit. Out-of-range positions are unlit.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        if col >= GLYPH_WIDTH as usize {
            return false;
        }
        self.rows
            .get(row)
            .is_some_and(|bits| bits & (0x80 >> col) != 0)
    }

    /// Number of lit pixels.
    pub fn lit_pixels(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }
}

/// Returns the glyph for `code`, or the space glyph when `code` is outside 32..=126.
///
/// Accepts any integer type so that C-style signed chars, raw bytes, indices
/// and Unicode scalar values all go through the same normalization. Values
/// that do not even fit an `i64` are out of range too.
pub fn lookup<C: TryInto<i64>>(code: C) -> &'static Glyph {
    let Ok(code) = code.try_into() else {
        return space();
    };
    if (FIRST_CODE..=LAST_CODE).contains(&code) {
        &GLYPHS[(code - FIRST_CODE) as usize]
    } else {
        space()
    }
}

/// Returns the glyph for `ch`; anything that is not printable ASCII maps to space.
pub fn lookup_char(ch: char) -> &'static Glyph {
    lookup(u32::from(ch))
}

/// The fallback glyph.
pub fn space() -> &'static Glyph {
    &GLYPHS[0]
}

/// Iterates over every `(char, glyph)` pair in the table in code order.
pub fn iter() -> impl Iterator<Item = (char, &'static Glyph)> {
    GLYPHS
        .iter()
        .enumerate()
        .map(|(i, glyph)| (char::from(FIRST_CODE as u8 + i as u8), glyph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test_log::test]
    fn table_covers_printable_ascii() {
        assert_eq!(GLYPH_COUNT, 95);
        let chars: Vec<char> = iter().map(|(ch, _)| ch).collect();
        assert_eq!(chars.first(), Some(&' '));
        assert_eq!(chars.last(), Some(&'~'));
        assert!(chars.windows(2).all(|w| w[0] as u32 + 1 == w[1] as u32));
    }

    #[test_log::test]
    fn space_is_blank_and_letters_are_not() {
        assert!(space().is_blank());
        assert_eq!(space().lit_pixels(), 0);
        for ch in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            assert!(!lookup_char(ch).is_blank(), "glyph for {ch:?} is empty");
        }
    }

    #[test_log::test]
    fn boundary_codes() {
        assert_eq!(lookup(32u8), space());
        assert_eq!(lookup(126u8), lookup_char('~'));
        assert_eq!(lookup(127u8), space());
        assert_eq!(lookup(31u8), space());
        assert_eq!(lookup(-1i8), space());
        assert_eq!(lookup_char('é'), space());
        assert_eq!(lookup_char('\n'), space());
    }

    #[test_log::test]
    fn wide_and_pointer_sized_codes() {
        assert_eq!(lookup(65usize), lookup_char('A'));
        assert_eq!(lookup(126u64), lookup_char('~'));
        assert_eq!(lookup(-5isize), space());
        assert_eq!(lookup(u64::MAX), space());
        assert_eq!(lookup(u128::MAX), space());
        assert_eq!(lookup(i128::MIN), space());
        assert_eq!(lookup(i64::MAX as u128 + 65), space());
    }

    #[test_log::test]
    fn is_set_reads_msb_first() {
        let glyph = Glyph::new([0x80, 0x01, 0, 0, 0, 0, 0, 0xFF]);
        assert!(glyph.is_set(0, 0));
        assert!(!glyph.is_set(7, 0));
        assert!(glyph.is_set(7, 1));
        assert!((0..8).all(|col| glyph.is_set(col, 7)));
        assert!(!glyph.is_set(8, 7));
        assert!(!glyph.is_set(0, 8));
        assert_eq!(glyph.lit_pixels(), 10);
    }

    proptest! {
        #[test]
        fn out_of_range_codes_fall_back_to_space(code in any::<i64>()) {
            prop_assume!(!(FIRST_CODE..=LAST_CODE).contains(&code));
            prop_assert_eq!(lookup(code), lookup(32u8));
        }

        #[test]
        fn unsigned_codes_past_i64_fall_back_to_space(code in (i64::MAX as u64 + 1)..=u64::MAX) {
            prop_assert_eq!(lookup(code), space());
        }

        #[test]
        fn in_range_codes_index_the_table(code in FIRST_CODE..=LAST_CODE) {
            let ch = char::from(code as u8);
            prop_assert_eq!(lookup(code), lookup_char(ch));
        }
    }
}
