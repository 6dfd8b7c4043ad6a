//! Motif dispatch and self-similar nesting
//!
//! A motif is drawn under an explicit [`Transform`]. Nested motifs reuse the
//! parent's origin and compose an extra rotation on top of the parent's, so
//! the whole nest turns together without any shared canvas state.

use crate::canvas::color::Color;
use crate::canvas::geometry::Transform;
use crate::canvas::raster::Canvas;
use crate::io::configuration::{MANDALA_INNER_MOTIF_RANGE, MANDALA_INNER_RADIUS_RANGE};
use crate::io::error::Result;
use crate::motif::{mandala, polygon, star};
use crate::palette::ordered::Palette;
use rand::Rng;
use std::f64::consts::TAU;

/// The three decorative units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotifKind {
    /// Concentric petal layers
    Mandala,
    /// Pointed star
    Star,
    /// Regular polygon
    Polygon,
}

impl MotifKind {
    /// Every motif kind
    pub const ALL: [Self; 3] = [Self::Mandala, Self::Star, Self::Polygon];

    /// Uniformly random kind
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..3_u8) {
            0 => Self::Mandala,
            1 => Self::Star,
            _ => Self::Polygon,
        }
    }

    /// Draw one motif of this kind
    pub fn draw<R: Rng>(
        self,
        canvas: &mut Canvas,
        transform: &Transform,
        radius: f64,
        colors: &[Color],
        rng: &mut R,
    ) {
        match self {
            Self::Mandala => {
                mandala::draw(canvas, transform, radius, colors, rng);
            }
            Self::Star => {
                star::draw(canvas, transform, radius, colors, rng);
            }
            Self::Polygon => {
                polygon::draw(canvas, transform, radius, colors, rng);
            }
        }
    }
}

/// One motif instance: what to draw, where, how large and in which colors
#[derive(Debug, Clone, PartialEq)]
pub struct MotifPlacement {
    /// Motif kind
    pub kind: MotifKind,
    /// Local-to-canvas transform
    pub transform: Transform,
    /// Outer radius in pixels
    pub radius: f64,
    /// Sub-palette
    pub colors: Vec<Color>,
}

impl MotifPlacement {
    /// Random child placement sharing this motif's origin
    ///
    /// # Errors
    ///
    /// Returns an error if `palette` sampling is given an invalid count
    pub fn random_child<R: Rng>(&self, palette: &Palette, rng: &mut R) -> Result<Self> {
        let kind = MotifKind::random(rng);
        let (low, high) = MANDALA_INNER_RADIUS_RANGE;
        let radius = self.radius * rng.random_range(low..=high);
        let transform = self.transform.rotated(rng.random_range(0.0..TAU));
        let color_count = rng.random_range(2..=self.colors.len().max(2));
        let colors = palette.sample(rng, color_count)?;
        Ok(Self {
            kind,
            transform,
            radius,
            colors,
        })
    }
}

/// Draw a motif and, while `depth > 0`, a random set of motifs nested inside it
///
/// Returns the total number of motifs drawn, the outer one included.
///
/// # Errors
///
/// Returns an error if sub-palette sampling fails
pub fn draw_nested<R: Rng>(
    canvas: &mut Canvas,
    placement: &MotifPlacement,
    palette: &Palette,
    depth: usize,
    rng: &mut R,
) -> Result<usize> {
    placement.kind.draw(
        canvas,
        &placement.transform,
        placement.radius,
        &placement.colors,
        rng,
    );
    if depth == 0 {
        return Ok(1);
    }

    let (low, high) = MANDALA_INNER_MOTIF_RANGE;
    let children = rng.random_range(low..=high);
    let mut drawn = 1;
    for _ in 0..children {
        let child = placement.random_child(palette, rng)?;
        drawn += draw_nested(canvas, &child, palette, depth - 1, rng)?;
    }
    Ok(drawn)
}
