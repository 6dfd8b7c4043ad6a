//! Ordered color palettes with seeded shuffling and sampling

use crate::canvas::color::Color;
use crate::io::error::{PatternError, Result, invalid_argument};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;

/// Ordered list of colors available to one generation pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette, rejecting an empty color list
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyPalette`] if `colors` is empty
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(PatternError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a list of hex colors
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is not a valid hex color
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let colors = entries
            .iter()
            .map(|entry| Color::from_hex(entry.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { colors })
    }

    /// Number of colors
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color at `index`, if present
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Color at `index mod len`; white for an empty palette
    pub fn cyclic(&self, index: usize) -> Color {
        index
            .checked_rem(self.colors.len())
            .and_then(|i| self.colors.get(i))
            .copied()
            .unwrap_or(Color::WHITE)
    }

    /// Uniformly random color; white for an empty palette
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Color {
        self.colors.choose(rng).copied().unwrap_or(Color::WHITE)
    }

    /// A permuted copy of this palette
    #[must_use]
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Self {
        let mut colors = self.colors.clone();
        colors.shuffle(rng);
        Self { colors }
    }

    /// Up to `count` distinct entries from a freshly shuffled copy
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero
    pub fn sample<R: Rng>(&self, rng: &mut R, count: usize) -> Result<Vec<Color>> {
        if count < 1 {
            return Err(invalid_argument(
                "count",
                &count,
                &"sample size must be at least 1",
            ));
        }
        let mut shuffled = self.shuffled(rng).colors;
        shuffled.truncate(count);
        Ok(shuffled)
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: Vec<String> = self.colors.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", hex.join(", "))
    }
}
