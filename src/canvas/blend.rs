//! Separable blend modes and straight-alpha compositing
//!
//! Formulas follow the W3C Compositing and Blending Level 1 definitions:
//! the blended color is `(1 - ab) * Cs + ab * B(Cb, Cs)`, then composited
//! source-over onto the backdrop.

use crate::io::error::PatternError;
use std::str::FromStr;

/// How source color combines with the backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source replaces the backdrop (before alpha)
    #[default]
    Normal,
    /// Darkens by multiplying channels
    Multiply,
    /// Lightens by inverting, multiplying and inverting again
    Screen,
    /// Multiply or screen depending on the backdrop
    Overlay,
    /// Gentle darken or lighten depending on the source
    SoftLight,
}

impl BlendMode {
    /// Blend one channel, `backdrop` and `source` in `[0, 1]`
    pub fn blend_channel(self, backdrop: f64, source: f64) -> f64 {
        match self {
            Self::Normal => source,
            Self::Multiply => backdrop * source,
            Self::Screen => screen(backdrop, source),
            Self::Overlay => hard_light(source, backdrop),
            Self::SoftLight => soft_light(backdrop, source),
        }
    }
}

impl FromStr for BlendMode {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "normal" => Ok(Self::Normal),
            "multiply" => Ok(Self::Multiply),
            "screen" => Ok(Self::Screen),
            "overlay" => Ok(Self::Overlay),
            "softlight" => Ok(Self::SoftLight),
            _ => Err(crate::io::error::invalid_argument(
                "blend_mode",
                &s,
                &"expected normal, multiply, screen, overlay or soft-light",
            )),
        }
    }
}

fn screen(backdrop: f64, source: f64) -> f64 {
    backdrop.mul_add(-source, backdrop + source)
}

fn hard_light(backdrop: f64, source: f64) -> f64 {
    if source <= 0.5 {
        backdrop * 2.0 * source
    } else {
        screen(backdrop, 2.0f64.mul_add(source, -1.0))
    }
}

fn soft_light(backdrop: f64, source: f64) -> f64 {
    if source <= 0.5 {
        let darken = 2.0f64.mul_add(-source, 1.0) * (1.0 - backdrop);
        backdrop.mul_add(-darken, backdrop)
    } else {
        let d = if backdrop <= 0.25 {
            16.0f64
                .mul_add(backdrop, -12.0)
                .mul_add(backdrop, 4.0)
                * backdrop
        } else {
            backdrop.sqrt()
        };
        2.0f64.mul_add(source, -1.0).mul_add(d - backdrop, backdrop)
    }
}

/// Composite a straight-alpha source pixel onto a straight-alpha backdrop
///
/// Both pixels are `[r, g, b, a]` with channels in `[0, 1]`
pub fn composite(backdrop: [f64; 4], source: [f64; 4], mode: BlendMode) -> [f64; 4] {
    let [br, bg, bb, ba] = backdrop;
    let [sr, sg, sb, sa] = source;
    if sa <= 0.0 {
        return backdrop;
    }

    let out_alpha = ba.mul_add(1.0 - sa, sa);
    if out_alpha <= 0.0 {
        return [0.0; 4];
    }

    let channel = |cb: f64, cs: f64| {
        let mixed = (1.0 - ba).mul_add(cs, ba * mode.blend_channel(cb, cs));
        let premultiplied = sa.mul_add(mixed, (1.0 - sa) * ba * cb);
        (premultiplied / out_alpha).clamp(0.0, 1.0)
    };

    [
        channel(br, sr),
        channel(bg, sg),
        channel(bb, sb),
        out_alpha.clamp(0.0, 1.0),
    ]
}
