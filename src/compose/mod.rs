//! Layout composers deciding where and how many shapes to place
//!
//! One composer exists per pattern kind. Each makes a single pass over the
//! canvas it is given and keeps no state between invocations.

/// Geometric and floral grids
pub mod grid;
/// Tiled, nested mandala motifs
pub mod mandala;
/// Layered combination of simpler composers
pub mod mixed;
/// Abstract segments and dots
pub mod scatter;
/// Primitive shape outlines
pub mod shapes;
/// Waves and vertical lines
pub mod stripes;
