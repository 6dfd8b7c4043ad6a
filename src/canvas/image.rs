//! Finished raster output and its PNG encoding

use crate::canvas::color::Color;
use crate::canvas::geometry::CanvasSize;
use crate::io::error::{PatternError, Result, invalid_argument};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Immutable 8-bit RGBA image produced by a generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    buffer: RgbaImage,
}

impl RasterImage {
    /// Wrap row-major RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is not exactly `width * height * 4` bytes
    pub fn from_rgba(size: CanvasSize, data: Vec<u8>) -> Result<Self> {
        let expected = size.width as usize * size.height as usize * 4;
        let actual = data.len();
        RgbaImage::from_raw(size.width, size.height, data)
            .filter(|_| actual == expected)
            .map(|buffer| Self { buffer })
            .ok_or_else(|| {
                invalid_argument("data", &actual, &format!("expected {expected} RGBA bytes"))
            })
    }

    pub(crate) const fn from_buffer(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    /// Image dimensions
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.buffer.width(), self.buffer.height())
    }

    /// Color of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.buffer
            .get_pixel_checked(x, y)
            .map(|pixel| Color::from_rgba8(pixel.0))
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// Encode as PNG bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG encoder fails
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.buffer
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|source| PatternError::ImageEncode { source })?;
        Ok(bytes)
    }

    /// Decode PNG bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid PNG image
    pub fn decode_png(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|source| PatternError::ImageDecode { source })?;
        Ok(Self {
            buffer: decoded.to_rgba8(),
        })
    }

    /// Write the image as a PNG file, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be written
    pub fn save_png(&self, output_path: &Path) -> Result<()> {
        write_png(output_path, &self.encode_png()?)
    }
}

/// Write already-encoded PNG bytes, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn write_png(output_path: &Path, png: &[u8]) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, png).map_err(|e| PatternError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
