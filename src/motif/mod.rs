//! Decorative motifs drawn around a local origin

/// Layered petal motif
pub mod mandala;
/// Motif dispatch and recursive nesting
pub mod nesting;
/// Regular polygon motif
pub mod polygon;
/// Pointed star motif
pub mod star;

pub use nesting::{MotifKind, MotifPlacement, draw_nested};
