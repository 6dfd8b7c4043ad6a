//! The closed set of pattern kinds and their textual names

use crate::io::error::PatternError;
use std::fmt;
use std::str::FromStr;

/// Which composer lays out the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternKind {
    /// Nested motifs tiled over the canvas
    #[default]
    Mandala,
    /// Random shapes on a grid
    Geometric,
    /// Flowers on a grid
    Floral,
    /// Random line segments
    Abstract,
    /// Horizontal sine waves
    Waves,
    /// Random discs
    Dots,
    /// Vertical lines
    Lines,
    /// Two or three of the simpler kinds layered together
    Mixed,
}

impl PatternKind {
    /// Every kind, in display order
    pub const ALL: [Self; 8] = [
        Self::Mandala,
        Self::Geometric,
        Self::Floral,
        Self::Abstract,
        Self::Waves,
        Self::Dots,
        Self::Lines,
        Self::Mixed,
    ];

    /// Display name as stored alongside generated artwork
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mandala => "Mandala",
            Self::Geometric => "Geometric",
            Self::Floral => "Floral",
            Self::Abstract => "Abstract",
            Self::Waves => "Waves",
            Self::Dots => "Dots",
            Self::Lines => "Lines",
            Self::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = PatternError;

    /// Case-insensitive; stored records use the capitalized display names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PatternError::UnknownPatternKind {
                name: s.to_string(),
            })
    }
}
