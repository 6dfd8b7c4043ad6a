//! Pointed star motif alternating outer and inner vertices

use crate::canvas::color::Color;
use crate::canvas::geometry::{Path, Point, Transform};
use crate::canvas::raster::Canvas;
use crate::io::configuration::MOTIF_STAR_INNER_FRACTION;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f64::consts::{PI, TAU};

/// Inclusive bounds on the number of star points
pub const POINT_RANGE: (usize, usize) = (6, 10);

/// Closed star outline with `points` outer and `points` inner vertices
///
/// Outer vertex `i` sits at angle `i * 2π / points` on the full radius; the
/// inner vertex that follows it is offset by half a step at half the radius.
pub fn star_path(points: usize, radius: f64) -> Path {
    let step = TAU / points.max(1) as f64;
    let vertices: Vec<Point> = (0..points)
        .flat_map(|i| {
            let angle = step * i as f64;
            [
                Point::polar(radius, angle),
                Point::polar(radius * MOTIF_STAR_INNER_FRACTION, angle + PI / points as f64),
            ]
        })
        .collect();
    Path::polygon(&vertices)
}

/// Draw the motif and return its point count
pub fn draw<R: Rng>(
    canvas: &mut Canvas,
    transform: &Transform,
    radius: f64,
    colors: &[Color],
    rng: &mut R,
) -> usize {
    let points = rng.random_range(POINT_RANGE.0..=POINT_RANGE.1);
    let color = colors.choose(rng).copied().unwrap_or(Color::WHITE);
    canvas.fill_path(&star_path(points, radius).transformed(transform), color);
    points
}
