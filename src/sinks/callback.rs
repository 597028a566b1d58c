// src/sinks/callback.rs

use crate::font::lookup_char;
use crate::rasterizer::rasterize;
use crate::sinks::GlyphSink;

/// Receives individual lit pixels from a [`CallbackSink`].
///
/// The implementor is the caller-owned context (a terminal grid, a display
/// driver handle, a test recorder). `color` is passed through untouched; the
/// core never inspects it. Any `FnMut(i32, i32, &C)` closure is a target.
pub trait PixelTarget<C: ?Sized> {
    fn put_pixel(&mut self, x: i32, y: i32, color: &C);
}

impl<C: ?Sized, F> PixelTarget<C> for F
where
    F: FnMut(i32, i32, &C),
{
    fn put_pixel(&mut self, x: i32, y: i32, color: &C) {
        self(x, y, color)
    }
}

/// Forwards every lit pixel to a [`PixelTarget`] with a fixed color.
///
/// No clipping happens here: coordinates may be negative or arbitrarily large.
pub struct CallbackSink<'a, T: ?Sized, C> {
    target: &'a mut T,
    color: C,
}

impl<'a, T, C> CallbackSink<'a, T, C>
where
    T: PixelTarget<C> + ?Sized,
{
    pub fn new(target: &'a mut T, color: C) -> Self {
        Self { target, color }
    }

    pub fn color(&self) -> &C {
        &self.color
    }

    pub fn set_color(&mut self, color: C) {
        self.color = color;
    }

    /// Releases the borrow of the target.
    pub fn into_target(self) -> &'a mut T {
        self.target
    }
}

impl<T, C> GlyphSink for CallbackSink<'_, T, C>
where
    T: PixelTarget<C> + ?Sized,
{
    fn draw_glyph(&mut self, ch: char, x: i32, y: i32) {
        let target = &mut *self.target;
        let color = &self.color;
        rasterize(lookup_char(ch), x, y, |px, py| target.put_pixel(px, py, color));
    }
}
