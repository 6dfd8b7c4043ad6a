//! Built-in palettes and the fallback rules for user-supplied ones

use crate::canvas::color::Color;
use crate::io::error::{PatternError, Result};
use crate::palette::ordered::Palette;
use std::str::FromStr;

/// Saturated colors, the default palette
pub const VIBRANT: [Color; 12] = [
    Color::RED,
    Color::ORANGE,
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::PURPLE,
    Color::PINK,
    Color::CYAN,
    Color::rgb(0.9, 0.3, 0.4),
    Color::rgb(0.2, 0.7, 0.9),
    Color::rgb(0.8, 0.6, 0.2),
    Color::rgb(0.3, 0.9, 0.5),
];

/// Soft, light colors
pub const PASTEL: [Color; 8] = [
    Color::rgb(0.98, 0.82, 0.89),
    Color::rgb(0.8, 0.9, 0.95),
    Color::rgb(0.95, 0.95, 0.8),
    Color::rgb(0.9, 0.8, 0.95),
    Color::rgb(0.8, 0.95, 0.85),
    Color::rgb(0.95, 0.9, 0.8),
    Color::rgb(0.85, 0.8, 0.95),
    Color::rgb(0.8, 0.85, 0.95),
];

/// Pastel pink, blue and green used when a manual palette is left empty
pub const DEFAULT_MANUAL: [Color; 3] = [
    Color::rgb(0.95, 0.8, 0.9),
    Color::rgb(0.8, 0.9, 0.95),
    Color::rgb(0.9, 0.95, 0.8),
];

/// Where the colors for a generation pass come from
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteSource {
    /// The built-in vibrant table
    Vibrant,
    /// The built-in pastel table
    Pastel,
    /// Colors extracted from a photo by an external collaborator
    CustomImage(Palette),
    /// Colors picked by hand
    CustomManual(Palette),
}

impl PaletteSource {
    /// Resolve to a non-empty palette
    ///
    /// An empty extracted palette falls back to vibrant, an empty manual
    /// palette falls back to the three default pastels.
    pub fn resolve(&self) -> Palette {
        match self {
            Self::Vibrant => Palette::from(VIBRANT.to_vec()),
            Self::Pastel => Palette::from(PASTEL.to_vec()),
            Self::CustomImage(palette) if palette.is_empty() => Palette::from(VIBRANT.to_vec()),
            Self::CustomManual(palette) if palette.is_empty() => {
                Palette::from(DEFAULT_MANUAL.to_vec())
            }
            Self::CustomImage(palette) | Self::CustomManual(palette) => palette.clone(),
        }
    }
}

impl FromStr for PaletteSource {
    type Err = PatternError;

    /// Parses the built-in names; custom palettes are built from colors directly
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vibrant" => Ok(Self::Vibrant),
            "pastel" => Ok(Self::Pastel),
            _ => Err(crate::io::error::invalid_argument(
                "palette",
                &s,
                &"expected 'vibrant' or 'pastel'",
            )),
        }
    }
}
