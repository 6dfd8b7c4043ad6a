//! Generated artwork bundled with the inputs that produced it

use crate::canvas::geometry::CanvasSize;
use crate::canvas::image::RasterImage;
use crate::engine::generator::generate;
use crate::engine::kind::PatternKind;
use crate::io::error::Result;
use crate::palette::ordered::Palette;
use rand::Rng;
use std::time::SystemTime;

/// A rendered wallpaper as handed to storage collaborators
#[derive(Debug, Clone, PartialEq)]
pub struct Wallpaper {
    /// Stable identifier, kept across regeneration
    pub id: u64,
    /// PNG-encoded image
    pub png: Vec<u8>,
    /// Palette in the order it was rendered with
    pub palette: Palette,
    /// Pattern kind
    pub kind: PatternKind,
    /// Image dimensions
    pub size: CanvasSize,
    /// When the wallpaper was first created
    pub created_at: SystemTime,
}

impl Wallpaper {
    /// Shuffle the palette, render, and encode a new wallpaper
    ///
    /// # Errors
    ///
    /// Returns an error if generation or PNG encoding fails
    pub fn create<R: Rng>(
        kind: PatternKind,
        size: CanvasSize,
        palette: &Palette,
        rng: &mut R,
    ) -> Result<Self> {
        let id = rng.random::<u64>();
        Self::render(id, kind, size, palette, SystemTime::now(), rng)
    }

    /// Re-render with a reshuffled palette, keeping id, kind, size and timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if generation or PNG encoding fails
    pub fn regenerate<R: Rng>(&self, rng: &mut R) -> Result<Self> {
        Self::render(
            self.id,
            self.kind,
            self.size,
            &self.palette,
            self.created_at,
            rng,
        )
    }

    /// Decode the stored PNG
    ///
    /// # Errors
    ///
    /// Returns an error if the stored bytes are not a valid PNG
    pub fn decode(&self) -> Result<RasterImage> {
        RasterImage::decode_png(&self.png)
    }

    fn render<R: Rng>(
        id: u64,
        kind: PatternKind,
        size: CanvasSize,
        palette: &Palette,
        created_at: SystemTime,
        rng: &mut R,
    ) -> Result<Self> {
        let palette = palette.shuffled(rng);
        let image = generate(kind, size, &palette, rng)?;
        Ok(Self {
            id,
            png: image.encode_png()?,
            palette,
            kind,
            size,
            created_at,
        })
    }
}
