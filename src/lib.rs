//! Seeded procedural generation of mandala and pattern wallpapers
//!
//! Given a pattern kind, a canvas size and an ordered color palette, the engine
//! paints a deterministic raster image: nested radial motifs for mandalas, or
//! grid, scatter and stripe layouts for the simpler kinds. All randomness flows
//! from a caller-supplied random source, so a fixed seed reproduces the image.

#![forbid(unsafe_code)]

/// Raster surface, paths, colors, gradients and compositing
pub mod canvas;
/// Pattern layouts that arrange shapes and motifs over the canvas
pub mod compose;
/// Public generation entry points and the pattern kind set
pub mod engine;
/// Command-line front end, configuration, errors and logging
pub mod io;
/// Radial motifs and recursive nesting
pub mod motif;
/// Ordered palettes and built-in presets
pub mod palette;

pub use canvas::{CanvasSize, Color, RasterImage};
pub use engine::{PatternGenerator, PatternKind, Wallpaper, generate};
pub use io::error::{PatternError, Result};
pub use palette::{Palette, PaletteSource};
