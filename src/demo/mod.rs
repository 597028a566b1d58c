// src/demo/mod.rs

//! Host-side tooling built on the core: a text-grid renderer used by the
//! console demo and a wall-clock benchmark of the drawing entry points.

pub mod bench;
pub mod console;
