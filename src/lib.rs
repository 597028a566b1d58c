// src/lib.rs

//! Allocation-free rendering of an 8x8 ASCII bitmap font.
//!
//! Text flows through three stages:
//!
//! ```text
//! &str  →  [layout]  →  (char, x, y)  →  [rasterizer]  →  (x, y)  →  [sink]
//!          cursor,       per glyph        lit bits only      per pixel  callback / mono / RGB565
//!          newlines
//! ```
//!
//! The glyph table ([`font`]) is a compiled-in `static`. Nothing in the core
//! allocates, blocks or fails: unknown characters draw as blanks and pixels
//! outside a buffer are clipped.
//!
//! ```
//! use embedded_ascii::{color::Mono, draw_text_to_mono_buffer, text_width};
//!
//! let mut buffer = [0u8; 16 * 8];
//! let width = draw_text_to_mono_buffer("HI", &mut buffer, 16, 8, 0, 0, Mono::ON);
//! assert_eq!(width, text_width("HI"));
//! ```
//!
//! With the default `std` feature the crate also carries host tooling: a JSON
//! [`config`], a text-grid demo and a benchmark runner ([`demo`]). Without it
//! the crate is `no_std`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod color;
pub mod font;
pub mod layout;
pub mod metrics;
pub mod rasterizer;
pub mod sinks;

#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod demo;

pub use color::{Mono, Rgb565};
pub use font::{lookup, lookup_char, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use layout::{layout, layout_bytes, Cursor};
pub use metrics::{text_height, text_size, text_width, TextSize};
pub use rasterizer::{rasterize, rasterize_clipped};
pub use sinks::{
    draw_char, draw_char_to_mono_buffer, draw_char_to_rgb565_buffer, draw_text,
    draw_text_to_mono_buffer, draw_text_to_rgb565_buffer, BufferSink, CallbackSink, GlyphSink,
    MonoSink, PixelTarget, Rgb565Sink,
};
