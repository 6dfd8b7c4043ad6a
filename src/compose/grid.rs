//! Grid composers: random shapes per cell and rows of flowers
//!
//! Cell colors follow `palette[(row + col) mod len]`, so the color rhythm
//! depends only on palette order. Randomness only picks the cell shape.

use crate::canvas::color::Color;
use crate::canvas::geometry::{Path, Point};
use crate::canvas::raster::Canvas;
use crate::compose::shapes::{CellShape, flower_petals};
use crate::io::configuration::{FLORAL_GRID_SIZE, FLORAL_PETALS, GEOMETRIC_GRID_SIZE};
use crate::palette::ordered::Palette;
use rand::Rng;

/// Flower radius as a fraction of the smaller cell side
const FLOWER_RADIUS_FRACTION: f64 = 0.4;
/// Flower center disc radius as a fraction of the flower radius
const FLOWER_CENTER_FRACTION: f64 = 0.3;

/// Color of grid cell `(row, col)`
pub fn cell_color(palette: &Palette, row: usize, col: usize) -> Color {
    palette.cyclic(row + col)
}

/// Width and height of one cell when a canvas is split `cells` ways per side
fn cell_size(canvas: &Canvas, cells: usize) -> (f64, f64) {
    let size = canvas.size();
    let cells = cells.max(1) as f64;
    (size.width_f64() / cells, size.height_f64() / cells)
}

/// Fill each cell of an 8x8 grid with a random shape and return the shapes row-major
pub fn compose_geometric<R: Rng>(
    canvas: &mut Canvas,
    palette: &Palette,
    rng: &mut R,
) -> Vec<CellShape> {
    let (cell_width, cell_height) = cell_size(canvas, GEOMETRIC_GRID_SIZE);
    let mut shapes = Vec::with_capacity(GEOMETRIC_GRID_SIZE * GEOMETRIC_GRID_SIZE);

    for row in 0..GEOMETRIC_GRID_SIZE {
        for col in 0..GEOMETRIC_GRID_SIZE {
            let min = Point::new(col as f64 * cell_width, row as f64 * cell_height);
            let max = Point::new(min.x + cell_width, min.y + cell_height);
            let shape = CellShape::random(rng);
            canvas.fill_path(&shape.path(min, max), cell_color(palette, row, col));
            shapes.push(shape);
        }
    }
    shapes
}

/// Draw an 8-petal flower at the center of each cell of a 6x6 grid
pub fn compose_floral(canvas: &mut Canvas, palette: &Palette) {
    let (cell_width, cell_height) = cell_size(canvas, FLORAL_GRID_SIZE);
    let radius = cell_width.min(cell_height) * FLOWER_RADIUS_FRACTION;

    for row in 0..FLORAL_GRID_SIZE {
        for col in 0..FLORAL_GRID_SIZE {
            let center = Point::new(
                (col as f64 + 0.5) * cell_width,
                (row as f64 + 0.5) * cell_height,
            );
            let color = cell_color(palette, row, col);
            for petal in flower_petals(center, radius, FLORAL_PETALS) {
                canvas.fill_path(&petal, color);
            }
            canvas.fill_path(
                &Path::circle(center, radius * FLOWER_CENTER_FRACTION),
                color,
            );
        }
    }
}
