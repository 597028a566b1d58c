// src/sinks/buffer.rs

use log::trace;

use crate::color::Rgb565;
use crate::font::lookup_char;
use crate::rasterizer::rasterize_clipped;
use crate::sinks::GlyphSink;

/// A clipping sink over a caller-owned, row-major pixel buffer.
///
/// Pixel `(x, y)` lives at `pixels[y * width + x]`. Glyphs whose origin falls
/// outside the buffer are skipped entirely; glyphs that start inside are cut
/// at the right and bottom edges. Only lit pixels are written, so existing
/// content shows through the gaps of each glyph.
pub struct BufferSink<'a, P> {
    pixels: &'a mut [P],
    width: usize,
    height: usize,
    color: P,
}

/// One byte per pixel, holding 0 or 1.
pub type MonoSink<'a> = BufferSink<'a, u8>;
/// One RGB565 value per pixel.
pub type Rgb565Sink<'a> = BufferSink<'a, u16>;

impl<'a, P: Copy> BufferSink<'a, P> {
    /// Wraps `pixels` as a `width` x `height` surface drawing in `color`.
    ///
    /// If the slice holds fewer than `width * height` pixels, the usable
    /// height shrinks to the number of complete rows present.
    pub fn new(pixels: &'a mut [P], width: usize, height: usize, color: P) -> Self {
        let rows_present = pixels.len().checked_div(width).unwrap_or(0);
        let usable_height = height.min(rows_present);
        if usable_height < height {
            trace!(
                "BufferSink: slice of {} pixels holds {} of {} rows at width {}",
                pixels.len(),
                usable_height,
                height,
                width
            );
        }
        Self {
            pixels,
            width,
            height: usable_height,
            color,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color(&self) -> P {
        self.color
    }

    pub fn set_color(&mut self, color: P) {
        self.color = color;
    }

    /// Reads back a pixel; `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Sets every pixel of the surface to `value`, e.g. to clear a background.
    pub fn fill(&mut self, value: P) {
        let len = self.width * self.height;
        self.pixels[..len].fill(value);
    }
}

impl<'a> BufferSink<'a, u8> {
    /// A monochrome sink; `color` is written verbatim (normally [`crate::color::Mono::ON`]).
    pub fn mono(pixels: &'a mut [u8], width: usize, height: usize, color: u8) -> Self {
        Self::new(pixels, width, height, color)
    }
}

impl<'a> BufferSink<'a, u16> {
    pub fn rgb565(pixels: &'a mut [u16], width: usize, height: usize, color: Rgb565) -> Self {
        Self::new(pixels, width, height, color.into())
    }
}

impl<P: Copy> GlyphSink for BufferSink<'_, P> {
    fn draw_glyph(&mut self, ch: char, x: i32, y: i32) {
        let (width, height, color) = (self.width, self.height, self.color);
        let pixels = &mut *self.pixels;
        let drawn = rasterize_clipped(lookup_char(ch), x, y, width, height, |px, py| {
            pixels[py * width + px] = color;
        });
        if !drawn {
            trace!(
                "BufferSink: skipped {:?} at ({}, {}) outside {}x{}",
                ch,
                x,
                y,
                width,
                height
            );
        }
    }
}
