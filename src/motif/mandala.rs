//! Layered radial motif of gradient-shaded petals around a center disc

use crate::canvas::color::Color;
use crate::canvas::geometry::{Path, Point, Transform};
use crate::canvas::gradient::Gradient;
use crate::canvas::raster::Canvas;
use crate::io::configuration::{
    MOTIF_CENTER_DISC_FRACTION, MOTIF_LAYER_SHRINK, MOTIF_PETAL_TIP_ALPHA,
};
use rand::Rng;
use std::f64::consts::{FRAC_PI_6, TAU};

/// Inclusive bounds on the number of concentric layers
pub const LAYER_RANGE: (usize, usize) = (3, 5);

/// Radius of layer `layer` for a motif of radius `radius`
pub fn layer_radius(radius: f64, layer: usize) -> f64 {
    radius * (layer as f64).mul_add(-MOTIF_LAYER_SHRINK, 1.0)
}

/// Number of petals in layer `layer`
pub const fn petal_count(layer: usize) -> usize {
    8 + 4 * layer
}

/// Wedge spanning 30° either side of `angle`, in motif-local coordinates
pub fn petal_path(radius: f64, angle: f64) -> Path {
    Path::wedge(Point::ZERO, radius, angle - FRAC_PI_6, angle + FRAC_PI_6)
}

/// Draw the motif and return the number of layers drawn
pub fn draw<R: Rng>(
    canvas: &mut Canvas,
    transform: &Transform,
    radius: f64,
    colors: &[Color],
    rng: &mut R,
) -> usize {
    let layers = rng.random_range(LAYER_RANGE.0..=LAYER_RANGE.1);
    let center = transform.apply(Point::ZERO);

    for layer in 0..layers {
        let layer_radius = layer_radius(radius, layer);
        let segments = petal_count(layer);
        let color = layer_color(colors, layer);
        let shading = Gradient::two_stop(color, color.with_alpha(MOTIF_PETAL_TIP_ALPHA));

        for i in 0..segments {
            let angle = TAU * i as f64 / segments as f64;
            let petal = petal_path(layer_radius, angle).transformed(transform);
            let tip = transform.apply(Point::polar(layer_radius, angle));
            canvas.fill_path_with_color_and_linear_gradient(&petal, color, &shading, center, tip);
        }
    }

    let center_color = colors.last().copied().unwrap_or(Color::WHITE);
    let disc = Path::circle(Point::ZERO, radius * MOTIF_CENTER_DISC_FRACTION).transformed(transform);
    canvas.fill_path(&disc, center_color);

    layers
}

/// Color of layer `layer`, cycling through the sub-palette
pub fn layer_color(colors: &[Color], layer: usize) -> Color {
    layer
        .checked_rem(colors.len())
        .and_then(|i| colors.get(i))
        .copied()
        .unwrap_or(Color::WHITE)
}
