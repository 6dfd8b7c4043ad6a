//! Composer constants and runtime configuration defaults

use crate::canvas::color::Color;

// Tiled mandala composer
/// Canvas area (in square pixels) per mandala motif
pub const MANDALA_AREA_PER_MOTIF: u64 = 9000;
/// Smallest motif radius as a fraction of the shorter canvas side
pub const MANDALA_MIN_RADIUS_FRACTION: f64 = 0.06;
/// Largest motif radius as a fraction of the shorter canvas side
pub const MANDALA_MAX_RADIUS_FRACTION: f64 = 0.16;
/// Inclusive bounds on the number of colors in an outer motif's sub-palette
pub const MANDALA_SUB_PALETTE_RANGE: (usize, usize) = (3, 6);
/// Inclusive bounds on the number of motifs nested inside each outer motif
pub const MANDALA_INNER_MOTIF_RANGE: (usize, usize) = (2, 4);
/// Inner motif radius bounds as fractions of the outer radius
pub const MANDALA_INNER_RADIUS_RANGE: (f64, f64) = (0.3, 0.7);
/// Opacity of the soft-light overlay that unifies the tile
pub const MANDALA_OVERLAY_OPACITY: f64 = 0.18;

// Motif shape constants
/// Radius lost per concentric mandala layer, as a fraction of the motif radius
pub const MOTIF_LAYER_SHRINK: f64 = 0.18;
/// Center disc radius as a fraction of the motif radius
pub const MOTIF_CENTER_DISC_FRACTION: f64 = 0.18;
/// Alpha at the outer tip of a petal's gradient
pub const MOTIF_PETAL_TIP_ALPHA: f64 = 0.7;
/// Inner star vertex radius as a fraction of the outer radius
pub const MOTIF_STAR_INNER_FRACTION: f64 = 0.5;

// Grid and scatter composers
/// Cells per side of the geometric grid
pub const GEOMETRIC_GRID_SIZE: usize = 8;
/// Cells per side of the floral grid
pub const FLORAL_GRID_SIZE: usize = 6;
/// Petals per flower in the floral grid
pub const FLORAL_PETALS: usize = 8;
/// Number of segments in the abstract pattern
pub const ABSTRACT_LINE_COUNT: usize = 50;
/// Number of sine bands in the wave pattern
pub const WAVE_COUNT: usize = 5;
/// Horizontal step between wave polyline vertices in pixels
pub const WAVE_STEP: f64 = 10.0;
/// Angular frequency of each wave in radians per pixel
pub const WAVE_FREQUENCY: f64 = 0.02;
/// Number of discs in the dot pattern
pub const DOT_COUNT: usize = 200;
/// Number of vertical lines in the line pattern
pub const LINE_COUNT: usize = 30;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;

/// Neutral background painted before any composer runs
pub const BACKGROUND_COLOR: Color = Color::WHITE;

/// Named device resolutions (`name`, `label`, `width`, `height`)
pub const RESOLUTION_PRESETS: [(&str, &str, u32, u32); 3] = [
    ("xs-max", "iPhone XS Max", 1242, 2688),
    ("12-pro", "iPhone 12 Pro", 1170, 2532),
    ("se", "iPhone SE", 750, 1334),
];

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default preset used when no dimensions are given
pub const DEFAULT_PRESET: &str = "xs-max";
/// Default number of images rendered per kind
pub const DEFAULT_IMAGE_COUNT: usize = 1;

// Output settings
/// Directory generated images are written to
pub const DEFAULT_OUTPUT_DIR: &str = "wallpapers";
/// Extension of generated image files
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
