// src/color.rs

//! Pixel color types written by the buffer sinks.
//!
//! Monochrome buffers store one byte per pixel holding [`Mono::OFF`] or
//! [`Mono::ON`]. RGB565 buffers store one `u16` per pixel: five bits of red,
//! six of green, five of blue, red in the high bits.

use serde::{Deserialize, Serialize};

/// Monochrome pixel values.
pub struct Mono;

impl Mono {
    pub const OFF: u8 = 0;
    pub const ON: u8 = 1;
}

/// A packed 16-bit RGB565 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const BLACK: Rgb565 = Rgb565(0x0000);

    /// Packs 8-bit channels by truncating their low bits.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Rgb565((((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3))
    }

    /// Expands back to 8-bit channels, replicating high bits into the low ones
    /// so that full intensity maps to 255.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let r5 = ((self.0 >> 11) & 0x1F) as u8;
        let g6 = ((self.0 >> 5) & 0x3F) as u8;
        let b5 = (self.0 & 0x1F) as u8;
        ((r5 << 3) | (r5 >> 2), (g6 << 2) | (g6 >> 4), (b5 << 3) | (b5 >> 2))
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> u16 {
        color.0
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Rgb565(raw)
    }
}
