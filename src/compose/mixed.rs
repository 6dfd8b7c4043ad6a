//! Mixed composer layering several simpler composers on one canvas

use crate::canvas::raster::Canvas;
use crate::compose::{grid, scatter, stripes};
use crate::palette::ordered::Palette;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Inclusive bounds on the number of layers
pub const LAYER_RANGE: (usize, usize) = (2, 3);

/// Composers eligible for layering; mandala and abstract never take part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Random shapes on an 8x8 grid
    Geometric,
    /// Flowers on a 6x6 grid
    Floral,
    /// Horizontal sine waves
    Waves,
    /// Random discs
    Dots,
    /// Vertical lines
    Lines,
}

impl Layer {
    /// Every eligible layer
    pub const ALL: [Self; 5] = [
        Self::Geometric,
        Self::Floral,
        Self::Waves,
        Self::Dots,
        Self::Lines,
    ];

    /// Run this layer's composer
    pub fn compose<R: Rng>(self, canvas: &mut Canvas, palette: &Palette, rng: &mut R) {
        match self {
            Self::Geometric => {
                grid::compose_geometric(canvas, palette, rng);
            }
            Self::Floral => grid::compose_floral(canvas, palette),
            Self::Waves => stripes::compose_waves(canvas, palette),
            Self::Dots => scatter::compose_dots(canvas, palette, rng),
            Self::Lines => stripes::compose_lines(canvas, palette),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Geometric => "geometric",
            Self::Floral => "floral",
            Self::Waves => "waves",
            Self::Dots => "dots",
            Self::Lines => "lines",
        };
        f.write_str(name)
    }
}

/// Two or three distinct layers in random order
pub fn select_layers<R: Rng>(rng: &mut R) -> Vec<Layer> {
    let mut layers = Layer::ALL.to_vec();
    layers.shuffle(rng);
    layers.truncate(rng.random_range(LAYER_RANGE.0..=LAYER_RANGE.1));
    layers
}

/// Draw the selected layers in sequence and return them
pub fn compose<R: Rng>(canvas: &mut Canvas, palette: &Palette, rng: &mut R) -> Vec<Layer> {
    let layers = select_layers(rng);
    tracing::debug!(
        layers = ?layers.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "composing mixed layers"
    );
    for layer in &layers {
        layer.compose(canvas, palette, rng);
    }
    layers
}
