//! Pattern engine facade
//!
//! This module contains the public entry points:
//! - The closed set of pattern kinds
//! - Generation dispatch from kind to composer
//! - The wallpaper record pairing an image with its inputs

/// Generation entry points and the seeded generator
pub mod generator;
/// Pattern kind enumeration and parsing
pub mod kind;
/// Rendered wallpaper records
pub mod wallpaper;

pub use generator::{PatternGenerator, generate};
pub use kind::PatternKind;
pub use wallpaper::Wallpaper;
