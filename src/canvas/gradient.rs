//! Color ramps and the linear/radial geometry that samples them

use crate::canvas::color::Color;
use crate::canvas::geometry::Point;
use crate::io::error::{Result, invalid_argument};

/// A color pinned at a position along a gradient axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`
    pub position: f64,
    /// Color at that position
    pub color: Color,
}

impl ColorStop {
    /// Create a stop
    pub const fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}

/// Ordered color stops with strictly increasing positions
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Build a gradient from explicit stops
    ///
    /// # Errors
    ///
    /// Returns an error if there are no stops, a position lies outside
    /// `[0, 1]`, or positions are not strictly increasing
    pub fn new(stops: Vec<ColorStop>) -> Result<Self> {
        if stops.is_empty() {
            return Err(invalid_argument(
                "stops",
                &"[]",
                &"gradient needs at least one stop",
            ));
        }
        if let Some(stop) = stops
            .iter()
            .find(|stop| !(0.0..=1.0).contains(&stop.position))
        {
            return Err(invalid_argument(
                "stops",
                &stop.position,
                &"stop positions must lie in [0, 1]",
            ));
        }
        if let Some(pair) = stops
            .windows(2)
            .find(|pair| matches!(pair, [a, b] if a.position >= b.position))
        {
            let positions: Vec<f64> = pair.iter().map(|stop| stop.position).collect();
            return Err(invalid_argument(
                "stops",
                &format!("{positions:?}"),
                &"stop positions must be strictly increasing",
            ));
        }
        Ok(Self { stops })
    }

    /// Evenly spaced stops from first to last color
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty
    pub fn evenly_spaced(colors: &[Color]) -> Result<Self> {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        let stops = if colors.len() == 1 {
            colors.iter().map(|&c| ColorStop::new(0.0, c)).collect()
        } else {
            colors
                .iter()
                .enumerate()
                .map(|(i, &c)| ColorStop::new(i as f64 / last, c))
                .collect()
        };
        Self::new(stops)
    }

    /// Two-stop ramp from `start` to `end`
    pub fn two_stop(start: Color, end: Color) -> Self {
        Self {
            stops: vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)],
        }
    }

    /// The stops in position order
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at parameter `t`, clamped to the end stops
    pub fn sample(&self, t: f64) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::CLEAR;
        };
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }
        self.stops
            .windows(2)
            .find_map(|pair| match pair {
                [a, b] if t >= a.position && t <= b.position => {
                    let span = b.position - a.position;
                    Some(a.color.lerp(b.color, (t - a.position) / span))
                }
                _ => None,
            })
            .unwrap_or(last.color)
    }
}

/// How a gradient parameter is derived from a pixel position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientGeometry {
    /// Projection onto the axis from `start` to `end`
    Linear {
        /// Point where `t = 0`
        start: Point,
        /// Point where `t = 1`
        end: Point,
    },
    /// Distance from `center` between two radii
    Radial {
        /// Shared center of both circles
        center: Point,
        /// Radius where `t = 0`
        start_radius: f64,
        /// Radius where `t = 1`
        end_radius: f64,
    },
}

impl GradientGeometry {
    /// Gradient parameter at a point (unclamped)
    pub fn parameter(&self, point: Point) -> f64 {
        match *self {
            Self::Linear { start, end } => {
                let dx = end.x - start.x;
                let dy = end.y - start.y;
                let length_sq = dx.mul_add(dx, dy * dy);
                if length_sq <= f64::EPSILON {
                    return 0.0;
                }
                (point.x - start.x).mul_add(dx, (point.y - start.y) * dy) / length_sq
            }
            Self::Radial {
                center,
                start_radius,
                end_radius,
            } => {
                let span = end_radius - start_radius;
                if span.abs() <= f64::EPSILON {
                    return 0.0;
                }
                (center.distance(point) - start_radius) / span
            }
        }
    }
}
