//! Stripe composers: horizontal sine waves and vertical lines

use crate::canvas::geometry::{Path, Point};
use crate::canvas::raster::Canvas;
use crate::compose::shapes::line;
use crate::io::configuration::{LINE_COUNT, WAVE_COUNT, WAVE_FREQUENCY, WAVE_STEP};
use crate::palette::ordered::Palette;
use num_traits::ToPrimitive;

/// Wave amplitude as a fraction of the band height
const WAVE_AMPLITUDE_FRACTION: f64 = 0.3;
/// Stroke width of waves
const WAVE_WIDTH: f64 = 3.0;
/// Stroke width of vertical lines
const LINE_WIDTH: f64 = 2.0;

/// Sine polyline across `width` starting at `(0, baseline)`
pub fn wave_path(width: f64, baseline: f64, amplitude: f64) -> Path {
    let steps = (width / WAVE_STEP).floor().to_usize().unwrap_or(0);
    let points: Vec<Point> = (0..=steps)
        .map(|k| {
            let x = k as f64 * WAVE_STEP;
            Point::new(x, (x * WAVE_FREQUENCY).sin().mul_add(amplitude, baseline))
        })
        .collect();
    Path::polyline(&points)
}

/// Stroke one sine wave per horizontal band, band `i` in `palette[i mod len]`
pub fn compose_waves(canvas: &mut Canvas, palette: &Palette) {
    let size = canvas.size();
    let band_height = size.height_f64() / WAVE_COUNT as f64;

    for i in 0..WAVE_COUNT {
        let baseline = i as f64 * band_height;
        let path = wave_path(
            size.width_f64(),
            baseline,
            band_height * WAVE_AMPLITUDE_FRACTION,
        );
        canvas.stroke_path(&path, palette.cyclic(i), WAVE_WIDTH);
    }
}

/// Stroke 30 evenly spaced full-height vertical lines, line `i` in `palette[i mod len]`
pub fn compose_lines(canvas: &mut Canvas, palette: &Palette) {
    let size = canvas.size();
    let spacing = size.width_f64() / LINE_COUNT as f64;

    for i in 0..LINE_COUNT {
        let x = i as f64 * spacing;
        let path = line(Point::new(x, 0.0), Point::new(x, size.height_f64()));
        canvas.stroke_path(&path, palette.cyclic(i), LINE_WIDTH);
    }
}
