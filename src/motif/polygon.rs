//! Regular convex polygon motif

use crate::canvas::color::Color;
use crate::canvas::geometry::{Path, Point, Transform};
use crate::canvas::raster::Canvas;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f64::consts::TAU;

/// Inclusive bounds on the number of sides
pub const SIDE_RANGE: (usize, usize) = (5, 8);

/// Regular polygon with the first vertex on the local x axis
pub fn polygon_path(sides: usize, radius: f64) -> Path {
    let step = TAU / sides.max(1) as f64;
    let vertices: Vec<Point> = (0..sides)
        .map(|i| Point::polar(radius, step * i as f64))
        .collect();
    Path::polygon(&vertices)
}

/// Draw the motif and return its side count
pub fn draw<R: Rng>(
    canvas: &mut Canvas,
    transform: &Transform,
    radius: f64,
    colors: &[Color],
    rng: &mut R,
) -> usize {
    let sides = rng.random_range(SIDE_RANGE.0..=SIDE_RANGE.1);
    let color = colors.choose(rng).copied().unwrap_or(Color::WHITE);
    canvas.fill_path(&polygon_path(sides, radius).transformed(transform), color);
    sides
}
