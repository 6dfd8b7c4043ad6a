//! Scatter composers: random segments and random dots

use crate::canvas::geometry::{Path, Point};
use crate::canvas::raster::Canvas;
use crate::compose::shapes::line;
use crate::io::configuration::{ABSTRACT_LINE_COUNT, DOT_COUNT};
use crate::palette::ordered::Palette;
use rand::Rng;
use std::f64::consts::TAU;

/// Segment length as a fraction of the shorter canvas side
const SEGMENT_LENGTH_FRACTION: f64 = 0.3;
/// Stroke width of abstract segments
const SEGMENT_WIDTH: f64 = 2.0;
/// Largest dot diameter as a fraction of the shorter canvas side
const DOT_DIAMETER_FRACTION: f64 = 0.05;
/// Smallest dot diameter as a fraction of the largest
const DOT_MIN_SCALE: f64 = 0.2;

/// Random point inside the canvas, edges included
fn random_point<R: Rng>(canvas: &Canvas, rng: &mut R) -> Point {
    let size = canvas.size();
    Point::new(
        rng.random_range(0.0..=size.width_f64()),
        rng.random_range(0.0..=size.height_f64()),
    )
}

/// Stroke 50 equal-length segments at random positions and angles
pub fn compose_abstract<R: Rng>(canvas: &mut Canvas, palette: &Palette, rng: &mut R) {
    let length = canvas.size().min_dimension() * SEGMENT_LENGTH_FRACTION;

    for _ in 0..ABSTRACT_LINE_COUNT {
        let start = random_point(canvas, rng);
        let angle = rng.random_range(0.0..TAU);
        let color = palette.choose(rng);
        let offset = Point::polar(length, angle);
        let end = Point::new(start.x + offset.x, start.y + offset.y);
        canvas.stroke_path(&line(start, end), color, SEGMENT_WIDTH);
    }
}

/// Fill 200 discs of random size, position and color
pub fn compose_dots<R: Rng>(canvas: &mut Canvas, palette: &Palette, rng: &mut R) {
    let max_diameter = canvas.size().min_dimension() * DOT_DIAMETER_FRACTION;

    for _ in 0..DOT_COUNT {
        let center = random_point(canvas, rng);
        let diameter = rng.random_range(max_diameter * DOT_MIN_SCALE..=max_diameter);
        let color = palette.choose(rng);
        canvas.fill_path(&Path::circle(center, diameter / 2.0), color);
    }
}
