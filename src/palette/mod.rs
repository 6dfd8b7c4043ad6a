//! Color palettes and built-in presets

/// Ordered palette with seeded shuffle and sampling
pub mod ordered;
/// Vibrant, pastel and default manual palettes
pub mod presets;

pub use ordered::Palette;
pub use presets::PaletteSource;
