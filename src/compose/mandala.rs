//! Tiled mandala composer
//!
//! Scatters nested motifs over the canvas at a density proportional to its
//! area, then unifies the result with a faint soft-light gradient running
//! from the top-left to the bottom-right corner.

use crate::canvas::blend::BlendMode;
use crate::canvas::geometry::{CanvasSize, Point, Transform};
use crate::canvas::gradient::Gradient;
use crate::canvas::raster::Canvas;
use crate::io::configuration::{
    MANDALA_AREA_PER_MOTIF, MANDALA_MAX_RADIUS_FRACTION, MANDALA_MIN_RADIUS_FRACTION,
    MANDALA_OVERLAY_OPACITY, MANDALA_SUB_PALETTE_RANGE,
};
use crate::io::error::Result;
use crate::motif::nesting::{MotifKind, MotifPlacement, draw_nested};
use crate::palette::ordered::Palette;
use num_traits::ToPrimitive;
use rand::Rng;
use std::f64::consts::TAU;

/// Levels of motifs nested below each outer motif
pub const NESTING_DEPTH: usize = 1;

/// Colors in the unifying overlay gradient
const OVERLAY_COLORS: usize = 3;

/// Number of outer motifs for a canvas: `floor(width * height / 9000)`
pub fn motif_count(size: CanvasSize) -> usize {
    (size.area() / MANDALA_AREA_PER_MOTIF)
        .to_usize()
        .unwrap_or(usize::MAX)
}

/// Random outer motif placement within the canvas bounds
///
/// # Errors
///
/// Returns an error if sub-palette sampling fails
pub fn random_placement<R: Rng>(
    size: CanvasSize,
    palette: &Palette,
    rng: &mut R,
) -> Result<MotifPlacement> {
    let min_dimension = size.min_dimension();
    let origin = Point::new(
        rng.random_range(0.0..=size.width_f64()),
        rng.random_range(0.0..=size.height_f64()),
    );
    let radius = rng.random_range(
        min_dimension * MANDALA_MIN_RADIUS_FRACTION..=min_dimension * MANDALA_MAX_RADIUS_FRACTION,
    );
    let kind = MotifKind::random(rng);
    let (low, high) = MANDALA_SUB_PALETTE_RANGE;
    let color_count = rng.random_range(low..=high);
    let colors = palette.sample(rng, color_count)?;
    let rotation = rng.random_range(0.0..TAU);

    Ok(MotifPlacement {
        kind,
        transform: Transform::new(origin, rotation),
        radius,
        colors,
    })
}

/// Draw the tiled mandala pattern and return the number of outer motifs
///
/// # Errors
///
/// Returns an error if sub-palette sampling or overlay construction fails
pub fn compose<R: Rng>(canvas: &mut Canvas, palette: &Palette, rng: &mut R) -> Result<usize> {
    let size = canvas.size();
    let palette = palette.shuffled(rng);
    let count = motif_count(size);
    let mut drawn = 0;

    for _ in 0..count {
        let placement = random_placement(size, &palette, rng)?;
        drawn += draw_nested(canvas, &placement, &palette, NESTING_DEPTH, rng)?;
    }
    tracing::debug!(outer = count, total = drawn, "placed mandala motifs");

    let blend = Gradient::evenly_spaced(&palette.sample(rng, OVERLAY_COLORS)?)?;
    canvas.composite_overlay(
        &blend,
        Point::ZERO,
        Point::new(size.width_f64(), size.height_f64()),
        BlendMode::SoftLight,
        MANDALA_OVERLAY_OPACITY,
    );

    Ok(count)
}
