//! Software canvas: path filling, stroking, gradients and overlays
//!
//! The surface is an 8-bit straight-alpha RGBA array indexed
//! `[row, col, channel]`. Every operation builds a [`Coverage`] mask for the
//! affected pixels and then paints each covered pixel once per paint.

use crate::canvas::blend::{BlendMode, composite};
use crate::canvas::color::Color;
use crate::canvas::coverage::Coverage;
use crate::canvas::geometry::{CanvasSize, Contour, Path, Point};
use crate::canvas::gradient::{Gradient, GradientGeometry};
use crate::canvas::image::RasterImage;
use crate::io::error::Result;
use image::{Rgba, RgbaImage};
use ndarray::{Array3, Axis};
use std::f64::consts::TAU;

/// Vertices used to approximate a round stroke join
const JOIN_SEGMENTS: usize = 8;

/// What gets painted into covered pixels
#[derive(Debug, Clone, Copy)]
enum Paint<'a> {
    Solid(Color),
    Gradient(&'a Gradient, GradientGeometry),
}

impl Paint<'_> {
    fn color_at(&self, x: usize, y: usize) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::Gradient(gradient, geometry) => {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                gradient.sample(geometry.parameter(center))
            }
        }
    }
}

/// Mutable pixel surface owned by a single generation pass
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Array3<u8>,
    size: CanvasSize,
}

impl Canvas {
    /// Allocate a transparent surface
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the
    /// maximum canvas dimension
    pub fn create(size: CanvasSize) -> Result<Self> {
        let size = size.validated()?;
        Ok(Self {
            pixels: Array3::zeros((size.height as usize, size.width as usize, 4)),
            size,
        })
    }

    /// Surface dimensions
    pub const fn size(&self) -> CanvasSize {
        self.size
    }

    /// Color of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.rgba(x as usize, y as usize).map(Color::from_rgba8)
    }

    /// Overwrite every pixel with `color`
    pub fn fill_background(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for mut lane in self.pixels.lanes_mut(Axis(2)) {
            for (channel, value) in lane.iter_mut().zip(rgba) {
                *channel = value;
            }
        }
    }

    /// Fill the even-odd interior of a path
    pub fn fill_path(&mut self, path: &Path, color: Color) {
        let coverage = self.fill_coverage(path);
        self.paint(&coverage, Paint::Solid(color), BlendMode::Normal, 1.0);
    }

    /// Stroke every edge of a path as a ribbon of `width` pixels
    pub fn stroke_path(&mut self, path: &Path, color: Color, width: f64) {
        let half = width / 2.0;
        let contours = path.flatten();
        let mut coverage = Coverage::for_contours(&contours, self.size, half);

        for contour in &contours {
            for (a, b) in contour.edges() {
                let length = a.distance(b);
                if length <= f64::EPSILON {
                    continue;
                }
                let nx = -(b.y - a.y) / length * half;
                let ny = (b.x - a.x) / length * half;
                coverage.fill_polygon(vec![
                    Point::new(a.x + nx, a.y + ny),
                    Point::new(b.x + nx, b.y + ny),
                    Point::new(b.x - nx, b.y - ny),
                    Point::new(a.x - nx, a.y - ny),
                ]);
            }
            for joint in interior_vertices(contour) {
                coverage.fill_polygon(join_polygon(joint, half));
            }
        }

        self.paint(&coverage, Paint::Solid(color), BlendMode::Normal, 1.0);
    }

    /// Fill a path with a gradient along the axis from `start` to `end`
    pub fn fill_path_with_linear_gradient(
        &mut self,
        path: &Path,
        gradient: &Gradient,
        start: Point,
        end: Point,
    ) {
        let coverage = self.fill_coverage(path);
        let geometry = GradientGeometry::Linear { start, end };
        self.paint(
            &coverage,
            Paint::Gradient(gradient, geometry),
            BlendMode::Normal,
            1.0,
        );
    }

    /// Fill a path solid, then lay a linear gradient over the same pixels
    ///
    /// Equivalent to [`Canvas::fill_path`] followed by
    /// [`Canvas::fill_path_with_linear_gradient`] on `path`, but the path is
    /// scan-converted once.
    pub fn fill_path_with_color_and_linear_gradient(
        &mut self,
        path: &Path,
        color: Color,
        gradient: &Gradient,
        start: Point,
        end: Point,
    ) {
        let coverage = self.fill_coverage(path);
        self.paint(&coverage, Paint::Solid(color), BlendMode::Normal, 1.0);
        let geometry = GradientGeometry::Linear { start, end };
        self.paint(
            &coverage,
            Paint::Gradient(gradient, geometry),
            BlendMode::Normal,
            1.0,
        );
    }

    /// Fill a path with a gradient radiating from `center`
    pub fn fill_path_with_radial_gradient(
        &mut self,
        path: &Path,
        gradient: &Gradient,
        center: Point,
        start_radius: f64,
        end_radius: f64,
    ) {
        let coverage = self.fill_coverage(path);
        let geometry = GradientGeometry::Radial {
            center,
            start_radius,
            end_radius,
        };
        self.paint(
            &coverage,
            Paint::Gradient(gradient, geometry),
            BlendMode::Normal,
            1.0,
        );
    }

    /// Blend a full-canvas linear gradient over the existing pixels
    pub fn composite_overlay(
        &mut self,
        gradient: &Gradient,
        start: Point,
        end: Point,
        mode: BlendMode,
        opacity: f64,
    ) {
        let (width, height) = (self.size.width_f64(), self.size.height_f64());
        let mut coverage = Coverage::for_bounds(Point::ZERO, Point::new(width, height), self.size);
        coverage.fill_polygon(vec![
            Point::ZERO,
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ]);
        let geometry = GradientGeometry::Linear { start, end };
        self.paint(
            &coverage,
            Paint::Gradient(gradient, geometry),
            mode,
            opacity.clamp(0.0, 1.0),
        );
    }

    /// Finish drawing and hand out the pixel buffer
    pub fn export(self) -> RasterImage {
        let buffer = RgbaImage::from_fn(self.size.width, self.size.height, |x, y| {
            Rgba(self.rgba(x as usize, y as usize).unwrap_or_default())
        });
        RasterImage::from_buffer(buffer)
    }

    fn fill_coverage(&self, path: &Path) -> Coverage {
        let contours = path.flatten();
        let mut coverage = Coverage::for_contours(&contours, self.size, 0.0);
        coverage.fill_even_odd(&contours);
        coverage
    }

    fn paint(&mut self, coverage: &Coverage, paint: Paint<'_>, mode: BlendMode, opacity: f64) {
        for (x, y) in coverage.pixels() {
            let source = paint.color_at(x, y);
            let Some(rgba) = self.rgba(x, y) else {
                continue;
            };
            let backdrop = Color::from_rgba8(rgba);
            let [br, bg, bb, ba] = composite(
                [backdrop.red, backdrop.green, backdrop.blue, backdrop.alpha],
                [
                    source.red,
                    source.green,
                    source.blue,
                    source.alpha * opacity,
                ],
                mode,
            );
            let blended = Color::new(br, bg, bb, ba).to_rgba8();
            for (channel, value) in blended.into_iter().enumerate() {
                if let Some(slot) = self.pixels.get_mut((y, x, channel)) {
                    *slot = value;
                }
            }
        }
    }

    fn rgba(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        let mut rgba = [0; 4];
        for (channel, slot) in rgba.iter_mut().enumerate() {
            *slot = *self.pixels.get((y, x, channel))?;
        }
        Some(rgba)
    }
}

// Vertices where two stroked edges meet
fn interior_vertices(contour: &Contour) -> Vec<Point> {
    if contour.closed {
        contour.points.clone()
    } else {
        let len = contour.points.len();
        contour
            .points
            .get(1..len.saturating_sub(1))
            .map(<[Point]>::to_vec)
            .unwrap_or_default()
    }
}

fn join_polygon(center: Point, radius: f64) -> Vec<Point> {
    (0..JOIN_SEGMENTS)
        .map(|i| {
            let offset = Point::polar(radius, TAU * i as f64 / JOIN_SEGMENTS as f64);
            Point::new(center.x + offset.x, center.y + offset.y)
        })
        .collect()
}
