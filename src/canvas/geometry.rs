//! Points, canvas dimensions, rigid transforms and vector paths
//!
//! Paths are built in motif-local coordinates and mapped through a
//! [`Transform`] before rasterization. Arc segments are kept symbolic until
//! [`Path::flatten`] turns the whole path into polygon contours.

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{PatternError, Result};
use num_traits::ToPrimitive;
use std::f64::consts::TAU;

/// Upper bound on vertices emitted for a single arc
const MAX_ARC_STEPS: usize = 256;

/// Target length in pixels of each chord approximating an arc
const ARC_CHORD_LENGTH: f64 = 2.0;

/// A point in canvas pixel space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// The origin
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along `angle` (radians) from the origin
    pub fn polar(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos * radius, sin * radius)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Pixel dimensions of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CanvasSize {
    /// Create a size without validation
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Truncate floating-point dimensions to whole pixels
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not finite or truncates to
    /// zero or less
    pub fn from_dimensions(width: f64, height: f64) -> Result<Self> {
        let truncate = |value: f64| value.trunc().to_u32().filter(|&v| v > 0);
        match (truncate(width), truncate(height)) {
            (Some(w), Some(h)) => Self::new(w, h).validated(),
            _ => Err(PatternError::InvalidSize {
                width: width.to_u32().unwrap_or(0),
                height: height.to_u32().unwrap_or(0),
            }),
        }
    }

    /// Look up a named device preset
    pub fn preset(name: &str) -> Option<Self> {
        crate::io::configuration::RESOLUTION_PRESETS
            .iter()
            .find(|(key, label, _, _)| {
                key.eq_ignore_ascii_case(name) || label.eq_ignore_ascii_case(name)
            })
            .map(|&(_, _, width, height)| Self::new(width, height))
    }

    /// Check the dimensions are positive and within the allocation guard
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidSize`] when either side is zero or
    /// exceeds the maximum canvas dimension
    pub const fn validated(self) -> Result<Self> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_CANVAS_DIMENSION
            || self.height > MAX_CANVAS_DIMENSION
        {
            Err(PatternError::InvalidSize {
                width: self.width,
                height: self.height,
            })
        } else {
            Ok(self)
        }
    }

    /// Width as a float
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as a float
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// Length of the shorter side
    pub fn min_dimension(self) -> f64 {
        self.width_f64().min(self.height_f64())
    }

    /// Total pixel count
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Rotation about a local origin followed by translation to canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Canvas position of the local origin
    pub origin: Point,
    /// Rotation in radians applied before translation
    pub rotation: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation
    pub const IDENTITY: Self = Self {
        origin: Point::ZERO,
        rotation: 0.0,
    };

    /// Transform placing the local origin at `origin`, rotated by `rotation`
    pub const fn new(origin: Point, rotation: f64) -> Self {
        Self { origin, rotation }
    }

    /// Compose an additional local rotation on top of this transform
    #[must_use]
    pub fn rotated(self, rotation: f64) -> Self {
        Self {
            origin: self.origin,
            rotation: (self.rotation + rotation).rem_euclid(TAU),
        }
    }

    /// Map a local point into canvas space
    pub fn apply(&self, local: Point) -> Point {
        let (sin, cos) = self.rotation.sin_cos();
        Point::new(
            cos.mul_add(local.x, -sin * local.y) + self.origin.x,
            sin.mul_add(local.x, cos * local.y) + self.origin.y,
        )
    }
}

/// A single drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Start a new contour
    MoveTo(Point),
    /// Straight edge to a point
    LineTo(Point),
    /// Circular arc, connected by a straight edge from the current point
    Arc {
        /// Arc center
        center: Point,
        /// Arc radius
        radius: f64,
        /// Start angle in radians
        start: f64,
        /// End angle in radians
        end: f64,
        /// Sweep direction; clockwise on screen means increasing angle
        clockwise: bool,
    },
    /// Close the current contour
    Close,
}

/// Ordered sequence of segments forming one or more contours
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create an empty path
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Closed polygon through the given vertices
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::new();
        for (i, &point) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(point);
            } else {
                path.line_to(point);
            }
        }
        path.close();
        path
    }

    /// Open polyline through the given vertices
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::new();
        for (i, &point) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(point);
            } else {
                path.line_to(point);
            }
        }
        path
    }

    /// Full circle
    pub fn circle(center: Point, radius: f64) -> Self {
        let mut path = Self::new();
        path.arc(center, radius, 0.0, TAU, true);
        path.close();
        path
    }

    /// Axis-aligned ellipse inscribed in a rectangle
    pub fn ellipse(min: Point, max: Point) -> Self {
        let center = Point::new(f64::midpoint(min.x, max.x), f64::midpoint(min.y, max.y));
        let rx = (max.x - min.x).abs() / 2.0;
        let ry = (max.y - min.y).abs() / 2.0;
        let steps = arc_steps(rx.max(ry), TAU);
        let points: Vec<Point> = (0..steps)
            .map(|i| {
                let angle = TAU * i as f64 / steps as f64;
                let (sin, cos) = angle.sin_cos();
                Point::new(rx.mul_add(cos, center.x), ry.mul_add(sin, center.y))
            })
            .collect();
        Self::polygon(&points)
    }

    /// Pie wedge from `center` sweeping clockwise from `start` to `end`
    pub fn wedge(center: Point, radius: f64, start: f64, end: f64) -> Self {
        let mut path = Self::new();
        path.move_to(center);
        path.arc(center, radius, start, end, true);
        path.close();
        path
    }

    /// Begin a new contour
    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(point));
        self
    }

    /// Straight edge to `point`
    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.segments.push(PathSegment::LineTo(point));
        self
    }

    /// Circular arc
    pub fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        clockwise: bool,
    ) -> &mut Self {
        self.segments.push(PathSegment::Arc {
            center,
            radius,
            start,
            end,
            clockwise,
        });
        self
    }

    /// Close the current contour
    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// The recorded segments
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether the last contour is closed
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    /// Explicit vertices, ignoring arcs
    pub fn vertices(&self) -> Vec<Point> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
                PathSegment::Arc { .. } | PathSegment::Close => None,
            })
            .collect()
    }

    /// Map every coordinate through a transform
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|segment| match *segment {
                PathSegment::MoveTo(p) => PathSegment::MoveTo(transform.apply(p)),
                PathSegment::LineTo(p) => PathSegment::LineTo(transform.apply(p)),
                PathSegment::Arc {
                    center,
                    radius,
                    start,
                    end,
                    clockwise,
                } => PathSegment::Arc {
                    center: transform.apply(center),
                    radius,
                    start: start + transform.rotation,
                    end: end + transform.rotation,
                    clockwise,
                },
                PathSegment::Close => PathSegment::Close,
            })
            .collect();
        Self { segments }
    }

    /// Convert into polyline contours, each flagged closed or open
    pub fn flatten(&self) -> Vec<Contour> {
        let mut contours = Vec::new();
        let mut current = Contour::default();

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    if current.points.len() > 1 {
                        contours.push(std::mem::take(&mut current));
                    } else {
                        current.points.clear();
                    }
                    current.points.push(p);
                }
                PathSegment::LineTo(p) => current.points.push(p),
                PathSegment::Arc {
                    center,
                    radius,
                    start,
                    end,
                    clockwise,
                } => {
                    let sweep = arc_sweep(start, end, clockwise);
                    let steps = arc_steps(radius, sweep.abs());
                    for i in 0..=steps {
                        let angle = sweep.mul_add(i as f64 / steps as f64, start);
                        let offset = Point::polar(radius, angle);
                        current
                            .points
                            .push(Point::new(center.x + offset.x, center.y + offset.y));
                    }
                }
                PathSegment::Close => {
                    current.closed = true;
                    let start = current.points.first().copied();
                    contours.push(std::mem::take(&mut current));
                    // Drawing may continue from the start of the closed contour
                    if let Some(p) = start {
                        current.points.push(p);
                    }
                }
            }
        }

        if current.points.len() > 1 {
            contours.push(current);
        }
        contours
    }
}

/// A flattened polyline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    /// Vertices in drawing order
    pub points: Vec<Point>,
    /// Whether the last vertex connects back to the first
    pub closed: bool,
}

impl Contour {
    /// Edges of the contour; closed contours include the wrap-around edge
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let wrap = self
            .closed
            .then(|| self.points.last().copied().zip(self.points.first().copied()))
            .flatten();
        self.points
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] => Some((*a, *b)),
                _ => None,
            })
            .chain(wrap)
    }
}

/// Signed sweep from `start` to `end`; positive sweeps increase the angle
fn arc_sweep(start: f64, end: f64, clockwise: bool) -> f64 {
    let delta = end - start;
    if clockwise {
        if delta >= TAU {
            TAU
        } else {
            let sweep = delta.rem_euclid(TAU);
            if sweep == 0.0 && delta != 0.0 { TAU } else { sweep }
        }
    } else if -delta >= TAU {
        -TAU
    } else {
        let sweep = (-delta).rem_euclid(TAU);
        if sweep == 0.0 && delta != 0.0 { -TAU } else { -sweep }
    }
}

fn arc_steps(radius: f64, sweep: f64) -> usize {
    (radius.abs() * sweep / ARC_CHORD_LENGTH)
        .ceil()
        .to_usize()
        .unwrap_or(MAX_ARC_STEPS)
        .clamp(4, MAX_ARC_STEPS)
}
