//! Software rasterization primitives
//!
//! This module contains everything needed to turn vector shapes into pixels:
//! - Colors, gradients and blend modes
//! - Paths, transforms and canvas dimensions
//! - Coverage masks and the canvas that paints them
//! - The exported raster image and its PNG codec

/// Separable blend modes and compositing
pub mod blend;
/// Floating-point RGBA colors
pub mod color;
/// Bit-per-pixel coverage masks
pub mod coverage;
/// Points, sizes, transforms and paths
pub mod geometry;
/// Color ramps for linear and radial fills
pub mod gradient;
/// Finished raster output and PNG encoding
pub mod image;
/// The mutable drawing surface
pub mod raster;

pub use blend::BlendMode;
pub use color::Color;
pub use geometry::{CanvasSize, Path, Point, Transform};
pub use gradient::{ColorStop, Gradient};
pub use self::image::RasterImage;
pub use raster::Canvas;
