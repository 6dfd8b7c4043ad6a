//! Primitive shape outlines used by the grid and scatter composers

use crate::canvas::geometry::{Path, Point};
use rand::Rng;
use std::f64::consts::TAU;

/// Shape drawn into one cell of the geometric grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellShape {
    /// The whole cell
    Rectangle,
    /// Apex at the top center, base along the bottom edge
    Triangle,
    /// Ellipse inscribed in the cell
    Circle,
    /// Rhombus touching the midpoint of each edge
    Diamond,
}

impl CellShape {
    /// Every cell shape
    pub const ALL: [Self; 4] = [Self::Rectangle, Self::Triangle, Self::Circle, Self::Diamond];

    /// Uniformly random shape
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..4_u8) {
            0 => Self::Rectangle,
            1 => Self::Triangle,
            2 => Self::Circle,
            _ => Self::Diamond,
        }
    }

    /// Outline inside the rectangle `min`..`max`
    pub fn path(self, min: Point, max: Point) -> Path {
        let mid = Point::new(f64::midpoint(min.x, max.x), f64::midpoint(min.y, max.y));
        match self {
            Self::Rectangle => rectangle(min, max),
            Self::Triangle => Path::polygon(&[
                Point::new(mid.x, min.y),
                Point::new(max.x, max.y),
                Point::new(min.x, max.y),
            ]),
            Self::Circle => Path::ellipse(min, max),
            Self::Diamond => Path::polygon(&[
                Point::new(mid.x, min.y),
                Point::new(max.x, mid.y),
                Point::new(mid.x, max.y),
                Point::new(min.x, mid.y),
            ]),
        }
    }
}

/// Axis-aligned rectangle
pub fn rectangle(min: Point, max: Point) -> Path {
    Path::polygon(&[
        min,
        Point::new(max.x, min.y),
        max,
        Point::new(min.x, max.y),
    ])
}

/// Pie wedges of a flower, each `2π / petals` wide and centered on its angle
pub fn flower_petals(center: Point, radius: f64, petals: usize) -> Vec<Path> {
    let petal_angle = TAU / petals.max(1) as f64;
    (0..petals)
        .map(|i| {
            let angle = petal_angle * i as f64;
            Path::wedge(
                center,
                radius,
                angle - petal_angle / 2.0,
                angle + petal_angle / 2.0,
            )
        })
        .collect()
}

/// Straight segment from `start` to `end`
pub fn line(start: Point, end: Point) -> Path {
    Path::polyline(&[start, end])
}
