//! Floating-point RGBA colors with hex parsing and 8-bit quantization

use crate::io::error::{PatternError, Result};
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Straight-alpha color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub red: f64,
    /// Green channel
    pub green: f64,
    /// Blue channel
    pub blue: f64,
    /// Opacity
    pub alpha: f64,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent black
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    // System palette approximations used by the vibrant preset
    /// System red
    pub const RED: Self = Self::rgb(1.0, 0.231, 0.188);
    /// System orange
    pub const ORANGE: Self = Self::rgb(1.0, 0.584, 0.0);
    /// System yellow
    pub const YELLOW: Self = Self::rgb(1.0, 0.8, 0.0);
    /// System green
    pub const GREEN: Self = Self::rgb(0.204, 0.78, 0.349);
    /// System blue
    pub const BLUE: Self = Self::rgb(0.0, 0.478, 1.0);
    /// System purple
    pub const PURPLE: Self = Self::rgb(0.686, 0.322, 0.871);
    /// System pink
    pub const PINK: Self = Self::rgb(1.0, 0.176, 0.333);
    /// System cyan
    pub const CYAN: Self = Self::rgb(0.196, 0.678, 0.902);

    /// Create a color from all four channels, clamped into `[0, 1]`
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Same color with a replaced alpha channel
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Channel-wise linear interpolation, `t = 0` gives `self`
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            lerp(self.red, other.red, t),
            lerp(self.green, other.green, t),
            lerp(self.blue, other.blue, t),
            lerp(self.alpha, other.alpha, t),
        )
    }

    /// Quantize to 8-bit RGBA
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            quantize(self.alpha),
        ]
    }

    /// Expand 8-bit RGBA into floating-point channels
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|c| f64::from(c) / 255.0);
        Self::new(r, g, b, a)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
    ///
    /// # Errors
    ///
    /// Returns an error if the text has the wrong length or contains non-hex digits
    pub fn from_hex(text: &str) -> Result<Self> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(PatternError::InvalidColor {
                value: text.to_string(),
                reason: "expected 6 or 8 hex digits",
            });
        }

        let mut channels = [255_u8; 4];
        for (slot, index) in channels.iter_mut().zip((0..digits.len()).step_by(2)) {
            *slot = digits
                .get(index..index + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| PatternError::InvalidColor {
                    value: text.to_string(),
                    reason: "expected ASCII hex digits",
                })?;
        }
        Ok(Self::from_rgba8(channels))
    }
}

impl FromStr for Color {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Linear interpolation between two scalars
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    (b - a).mul_add(t, a)
}

fn quantize(channel: f64) -> u8 {
    // Clamped to [0, 255] so the cast cannot truncate
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
