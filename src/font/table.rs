// src/font/table.rs

//! Compiled-in 8x8 glyph bitmaps for ASCII 32..=126.
//!
//! Row 0 is the top of the glyph; bit 7 of each row is the leftmost pixel.

use super::{Glyph, GLYPH_COUNT};

pub(super) static GLYPHS: [Glyph; GLYPH_COUNT] = [
    Glyph::new([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // ' ' (32)
    Glyph::new([0x30, 0x78, 0x78, 0x30, 0x30, 0x00, 0x30, 0x00]), // '!'
    Glyph::new([0x6C, 0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00, 0x00]), // '"'
    Glyph::new([0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00]), // '#'
    Glyph::new([0x30, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x30, 0x00]), // '$'
    Glyph::new([0x00, 0xC6, 0xCC, 0x18, 0x30, 0x66, 0xC6, 0x00]), // '%'
    Glyph::new([0x38, 0x6C, 0x38, 0x76, 0xDC, 0xCC, 0x76, 0x00]), // '&'
    Glyph::new([0x60, 0x60, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00]), // '\''
    Glyph::new([0x18, 0x30, 0x60, 0x60, 0x60, 0x30, 0x18, 0x00]), // '('
    Glyph::new([0x60, 0x30, 0x18, 0x18, 0x18, 0x30, 0x60, 0x00]), // ')'
    Glyph::new([0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00]), // '*'
    Glyph::new([0x00, 0x30, 0x30, 0xFC, 0x30, 0x30, 0x00, 0x00]), // '+'
    Glyph::new([0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x60]), // ','
    Glyph::new([0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00]), // '-'
    Glyph::new([0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00]), // '.'
    Glyph::new([0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x80, 0x00]), // '/'
    Glyph::new([0x7C, 0xC6, 0xCE, 0xDE, 0xF6, 0xE6, 0x7C, 0x00]), // '0' (48)
    Glyph::new([0x30, 0x70, 0x30, 0x30, 0x30, 0x30, 0xFC, 0x00]), // '1'
    Glyph::new([0x78, 0xCC, 0x0C, 0x38, 0x60, 0xCC, 0xFC, 0x00]), // '2'
    Glyph::new([0x78, 0xCC, 0x0C, 0x38, 0x0C, 0xCC, 0x78, 0x00]), // '3'
    Glyph::new([0x1C, 0x3C, 0x6C, 0xCC, 0xFE, 0x0C, 0x1E, 0x00]), // '4'
    Glyph::new([0xFC, 0xC0, 0xF8, 0x0C, 0x0C, 0xCC, 0x78, 0x00]), // '5'
    Glyph::new([0x38, 0x60, 0xC0, 0xF8, 0xCC, 0xCC, 0x78, 0x00]), // '6'
    Glyph::new([0xFC, 0xCC, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00]), // '7'
    Glyph::new([0x78, 0xCC, 0xCC, 0x78, 0xCC, 0xCC, 0x78, 0x00]), // '8'
    Glyph::new([0x78, 0xCC, 0xCC, 0x7C, 0x0C, 0x18, 0x70, 0x00]), // '9'
    Glyph::new([0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00]), // ':'
    Glyph::new([0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x60]), // ';'
    Glyph::new([0x18, 0x30, 0x60, 0xC0, 0x60, 0x30, 0x18, 0x00]), // '<'
    Glyph::new([0x00, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00]), // '='
    Glyph::new([0x60, 0x30, 0x18, 0x0C, 0x18, 0x30, 0x60, 0x00]), // '>'
    Glyph::new([0x78, 0xCC, 0x0C, 0x18, 0x30, 0x00, 0x30, 0x00]), // '?'
    Glyph::new([0x7C, 0xC6, 0xDE, 0xDE, 0xDE, 0xC0, 0x78, 0x00]), // '@' (64)
    Glyph::new([0x30, 0x78, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00]), // 'A'
    Glyph::new([0xFC, 0x66, 0x66, 0x7C, 0x66, 0x66, 0xFC, 0x00]), // 'B'
    Glyph::new([0x3C, 0x66, 0xC0, 0xC0, 0xC0, 0x66, 0x3C, 0x00]), // 'C'
    Glyph::new([0xF8, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0xF8, 0x00]), // 'D'
    Glyph::new([0xFE, 0x62, 0x68, 0x78, 0x68, 0x62, 0xFE, 0x00]), // 'E'
    Glyph::new([0xFE, 0x62, 0x68, 0x78, 0x68, 0x60, 0xF0, 0x00]), // 'F'
    Glyph::new([0x3C, 0x66, 0xC0, 0xC0, 0xCE, 0x66, 0x3E, 0x00]), // 'G'
    Glyph::new([0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00]), // 'H'
    Glyph::new([0x78, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00]), // 'I'
    Glyph::new([0x1E, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78, 0x00]), // 'J'
    Glyph::new([0xE6, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0xE6, 0x00]), // 'K'
    Glyph::new([0xF0, 0x60, 0x60, 0x60, 0x62, 0x66, 0xFE, 0x00]), // 'L'
    Glyph::new([0xC6, 0xEE, 0xFE, 0xFE, 0xD6, 0xC6, 0xC6, 0x00]), // 'M'
    Glyph::new([0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00]), // 'N'
    Glyph::new([0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x00]), // 'O'
    Glyph::new([0xFC, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00]), // 'P' (80)
    Glyph::new([0x78, 0xCC, 0xCC, 0xCC, 0xDC, 0x78, 0x1C, 0x00]), // 'Q'
    Glyph::new([0xFC, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0xE6, 0x00]), // 'R'
    Glyph::new([0x78, 0xCC, 0xE0, 0x70, 0x1C, 0xCC, 0x78, 0x00]), // 'S'
    Glyph::new([0xFC, 0xB4, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00]), // 'T'
    Glyph::new([0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xFC, 0x00]), // 'U'
    Glyph::new([0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00]), // 'V'
    Glyph::new([0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00]), // 'W'
    Glyph::new([0xC6, 0xC6, 0x6C, 0x38, 0x38, 0x6C, 0xC6, 0x00]), // 'X'
    Glyph::new([0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x30, 0x78, 0x00]), // 'Y'
    Glyph::new([0xFE, 0xC6, 0x8C, 0x18, 0x32, 0x66, 0xFE, 0x00]), // 'Z'
    Glyph::new([0x78, 0x60, 0x60, 0x60, 0x60, 0x60, 0x78, 0x00]), // '['
    Glyph::new([0xC0, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x02, 0x00]), // '\\'
    Glyph::new([0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x78, 0x00]), // ']'
    Glyph::new([0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00]), // '^'
    Glyph::new([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF]), // '_'
    Glyph::new([0x30, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00]), // '`' (96)
    Glyph::new([0x00, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00]), // 'a'
    Glyph::new([0xE0, 0x60, 0x60, 0x7C, 0x66, 0x66, 0xDC, 0x00]), // 'b'
    Glyph::new([0x00, 0x00, 0x78, 0xCC, 0xC0, 0xCC, 0x78, 0x00]), // 'c'
    Glyph::new([0x1C, 0x0C, 0x0C, 0x7C, 0xCC, 0xCC, 0x76, 0x00]), // 'd'
    Glyph::new([0x00, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00]), // 'e'
    Glyph::new([0x38, 0x6C, 0x60, 0xF0, 0x60, 0x60, 0xF0, 0x00]), // 'f'
    Glyph::new([0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8]), // 'g'
    Glyph::new([0xE0, 0x60, 0x6C, 0x76, 0x66, 0x66, 0xE6, 0x00]), // 'h'
    Glyph::new([0x30, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00]), // 'i'
    Glyph::new([0x0C, 0x00, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78]), // 'j'
    Glyph::new([0xE0, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0xE6, 0x00]), // 'k'
    Glyph::new([0x70, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00]), // 'l'
    Glyph::new([0x00, 0x00, 0xCC, 0xFE, 0xFE, 0xD6, 0xC6, 0x00]), // 'm'
    Glyph::new([0x00, 0x00, 0xF8, 0xCC, 0xCC, 0xCC, 0xCC, 0x00]), // 'n'
    Glyph::new([0x00, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00]), // 'o'
    Glyph::new([0x00, 0x00, 0xDC, 0x66, 0x66, 0x7C, 0x60, 0xF0]), // 'p' (112)
    Glyph::new([0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0x1E]), // 'q'
    Glyph::new([0x00, 0x00, 0xDC, 0x76, 0x66, 0x60, 0xF0, 0x00]), // 'r'
    Glyph::new([0x00, 0x00, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x00]), // 's'
    Glyph::new([0x10, 0x30, 0x7C, 0x30, 0x30, 0x34, 0x18, 0x00]), // 't'
    Glyph::new([0x00, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x76, 0x00]), // 'u'
    Glyph::new([0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00]), // 'v'
    Glyph::new([0x00, 0x00, 0xC6, 0xD6, 0xFE, 0xFE, 0x6C, 0x00]), // 'w'
    Glyph::new([0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00]), // 'x'
    Glyph::new([0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8]), // 'y'
    Glyph::new([0x00, 0x00, 0xFC, 0x98, 0x30, 0x64, 0xFC, 0x00]), // 'z'
    Glyph::new([0x1C, 0x30, 0x30, 0xE0, 0x30, 0x30, 0x1C, 0x00]), // '{'
    Glyph::new([0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00]), // '|'
    Glyph::new([0xE0, 0x30, 0x30, 0x1C, 0x30, 0x30, 0xE0, 0x00]), // '}'
    Glyph::new([0x76, 0xDC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // '~' (126)
];
