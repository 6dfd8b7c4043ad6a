//! Pixel coverage masks built by even-odd scanline filling
//!
//! A mask spans only the clipped bounding box of the shapes it covers, so the
//! cost of a fill is proportional to the shape rather than the canvas.

use crate::canvas::geometry::{CanvasSize, Contour, Point};
use bitvec::prelude::*;
use num_traits::ToPrimitive;

/// Bit-per-pixel mask over a rectangular window of the canvas
#[derive(Clone, Debug)]
pub struct Coverage {
    bits: BitVec,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
}

impl Coverage {
    /// Empty mask over the part of `bounds` (min, max) that lies on the canvas
    pub fn for_bounds(min: Point, max: Point, size: CanvasSize) -> Self {
        let clamp_x = |v: f64| clamp_index(v, size.width);
        let clamp_y = |v: f64| clamp_index(v, size.height);
        let x0 = clamp_x(min.x.floor());
        let y0 = clamp_y(min.y.floor());
        let x1 = clamp_x(max.x.ceil() + 1.0);
        let y1 = clamp_y(max.y.ceil() + 1.0);
        let width = x1.saturating_sub(x0);
        let height = y1.saturating_sub(y0);

        Self {
            bits: bitvec![0; width * height],
            x0,
            y0,
            width,
            height,
        }
    }

    /// Mask window sized to the bounding box of the contours
    pub fn for_contours(contours: &[Contour], size: CanvasSize, padding: f64) -> Self {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for point in contours.iter().flat_map(|c| c.points.iter()) {
            min.x = min.x.min(point.x - padding);
            min.y = min.y.min(point.y - padding);
            max.x = max.x.max(point.x + padding);
            max.y = max.y.max(point.y + padding);
        }
        if min.x > max.x || min.y > max.y {
            return Self::for_bounds(Point::ZERO, Point::new(-2.0, -2.0), size);
        }
        Self::for_bounds(min, max, size)
    }

    /// Whether no pixel is covered
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of covered pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether canvas pixel `(x, y)` is covered
    pub fn contains(&self, x: usize, y: usize) -> bool {
        if x < self.x0 || y < self.y0 || x >= self.x0 + self.width || y >= self.y0 + self.height {
            return false;
        }
        let index = (y - self.y0) * self.width + (x - self.x0);
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Canvas coordinates of every covered pixel, row-major
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bits.iter_ones().map(move |index| {
            (
                self.x0 + index % self.width.max(1),
                self.y0 + index / self.width.max(1),
            )
        })
    }

    /// Add the even-odd interior of `contours` to the mask
    ///
    /// Every contour is treated as closed. A pixel is covered when its
    /// center lies inside. Edges are sorted by their top so each row only
    /// intersects the edges that span it.
    pub fn fill_even_odd(&mut self, contours: &[Contour]) {
        let mut edges: Vec<Edge> = contours
            .iter()
            .filter(|c| c.points.len() > 2)
            .flat_map(closed_edges)
            .filter_map(|(a, b)| Edge::new(a, b))
            .collect();
        edges.sort_by(|a, b| a.top.total_cmp(&b.top));
        let first_row = edges
            .first()
            .and_then(|e| (e.top - 1.5 - self.y0 as f64).ceil().max(0.0).to_usize())
            .unwrap_or(self.height);

        let mut pending = edges.into_iter().peekable();
        let mut active: Vec<Edge> = Vec::new();
        let mut crossings = Vec::new();
        for row in first_row..self.height {
            let sample_y = (self.y0 + row) as f64 + 0.5;
            while let Some(edge) = pending.next_if(|e| e.top <= sample_y) {
                active.push(edge);
            }
            active.retain(|e| e.bottom > sample_y);
            if active.is_empty() {
                if pending.peek().is_none() {
                    break;
                }
                continue;
            }

            crossings.clear();
            crossings.extend(active.iter().map(|e| e.x_at(sample_y)));
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                if let [left, right] = span {
                    self.set_span(row, *left, *right);
                }
            }
        }
    }

    /// Add a convex or concave polygon given by its vertices
    pub fn fill_polygon(&mut self, points: Vec<Point>) {
        self.fill_even_odd(&[Contour {
            points,
            closed: true,
        }]);
    }

    // Covers columns whose centers fall in [left, right)
    fn set_span(&mut self, row: usize, left: f64, right: f64) {
        let origin = self.x0 as f64;
        let first = (left - 0.5 - origin).ceil().max(0.0);
        let last = (right - 0.5 - origin).ceil().min(self.width as f64);
        let (Some(first), Some(last)) = (first.to_usize(), last.to_usize()) else {
            return;
        };
        if first >= last {
            return;
        }
        let start = row * self.width;
        if let Some(slice) = self.bits.get_mut(start + first..start + last) {
            slice.fill(true);
        }
    }
}

/// Non-horizontal edge covering sample rows in `[top, bottom)`
#[derive(Clone, Copy, Debug)]
struct Edge {
    a: Point,
    b: Point,
    top: f64,
    bottom: f64,
}

impl Edge {
    fn new(a: Point, b: Point) -> Option<Self> {
        let top = a.y.min(b.y);
        let bottom = a.y.max(b.y);
        (top < bottom).then_some(Self { a, b, top, bottom })
    }

    fn x_at(&self, sample_y: f64) -> f64 {
        let t = (sample_y - self.a.y) / (self.b.y - self.a.y);
        (self.b.x - self.a.x).mul_add(t, self.a.x)
    }
}

// Consecutive vertex pairs plus the closing edge back to the first vertex
fn closed_edges(contour: &Contour) -> impl Iterator<Item = (Point, Point)> + '_ {
    let closing = contour
        .points
        .last()
        .copied()
        .zip(contour.points.first().copied());
    contour
        .points
        .windows(2)
        .filter_map(|pair| match pair {
            [a, b] => Some((*a, *b)),
            _ => None,
        })
        .chain(closing)
}

fn clamp_index(value: f64, limit: u32) -> usize {
    value
        .clamp(0.0, f64::from(limit))
        .to_usize()
        .unwrap_or_default()
}
