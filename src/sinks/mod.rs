// src/sinks/mod.rs

//! Pixel sinks: where rasterized glyphs end up.
//!
//! Every sink implements [`GlyphSink`], the per-character contract used by
//! layout. The sinks differ only in how a lit pixel is recorded and in their
//! clipping policy:
//!
//! - [`CallbackSink`] hands every pixel to a caller-supplied [`PixelTarget`]
//!   without any bounds checks; the target may be unbounded or wrap around.
//! - [`BufferSink`] writes into a flat row-major slice and clips against its
//!   declared width and height. [`MonoSink`] stores one byte per pixel,
//!   [`Rgb565Sink`] one `u16` per pixel.
//!
//! The free functions at the bottom of this module are one-shot shortcuts that
//! build a sink, draw, and drop it.

pub mod buffer;
pub mod callback;


pub use buffer::{BufferSink, MonoSink, Rgb565Sink};
pub use callback::{CallbackSink, PixelTarget};

use crate::color::Rgb565;
use crate::layout::{layout, layout_bytes};

/// A consumer of glyphs placed by layout.
pub trait GlyphSink {
    /// Draws the glyph for `ch` with its top-left corner at `(x, y)`.
    fn draw_glyph(&mut self, ch: char, x: i32, y: i32);

    /// Lays out and draws `text`; returns the width of the last line.
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> u32 {
        layout(text, x, y, |ch, gx, gy| self.draw_glyph(ch, gx, gy))
    }

    /// Byte-oriented [`GlyphSink::draw_text`].
    fn draw_bytes(&mut self, text: &[u8], x: i32, y: i32) -> u32 {
        layout_bytes(text, x, y, |ch, gx, gy| self.draw_glyph(ch, gx, gy))
    }
}

impl<S: GlyphSink + ?Sized> GlyphSink for &mut S {
    fn draw_glyph(&mut self, ch: char, x: i32, y: i32) {
        (**self).draw_glyph(ch, x, y);
    }
}

/// Draws one character through `target`.
pub fn draw_char<T, C>(ch: char, x: i32, y: i32, target: &mut T, color: C)
where
    T: PixelTarget<C> + ?Sized,
{
    CallbackSink::new(target, color).draw_glyph(ch, x, y);
}

/// Draws `text` through `target`; returns the width of the last line.
pub fn draw_text<T, C>(text: &str, x: i32, y: i32, target: &mut T, color: C) -> u32
where
    T: PixelTarget<C> + ?Sized,
{
    CallbackSink::new(target, color).draw_text(text, x, y)
}

/// Draws one character into a `width` x `height` monochrome buffer.
pub fn draw_char_to_mono_buffer(
    ch: char,
    buffer: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    color: u8,
) {
    MonoSink::mono(buffer, width, height, color).draw_glyph(ch, x, y);
}

/// Draws one character into a `width` x `height` RGB565 buffer.
pub fn draw_char_to_rgb565_buffer(
    ch: char,
    buffer: &mut [u16],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    color: Rgb565,
) {
    Rgb565Sink::rgb565(buffer, width, height, color).draw_glyph(ch, x, y);
}

/// Draws `text` into a monochrome buffer; returns the width of the last line.
pub fn draw_text_to_mono_buffer(
    text: &str,
    buffer: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    color: u8,
) -> u32 {
    MonoSink::mono(buffer, width, height, color).draw_text(text, x, y)
}

/// Draws `text` into an RGB565 buffer; returns the width of the last line.
pub fn draw_text_to_rgb565_buffer(
    text: &str,
    buffer: &mut [u16],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    color: Rgb565,
) -> u32 {
    Rgb565Sink::rgb565(buffer, width, height, color).draw_text(text, x, y)
}
