//! Fully transparent PNG tile used to fill a generated zoom level.
//!
//! The image is encoded once and its bytes shared by every inserted row, so
//! per-tile cost is a blob bind and nothing more.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

use super::error::BlankTileError;

/// Standard web map tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Largest tile edge length accepted.
pub const MAX_TILE_SIZE: u32 = 4096;

/// Colour channels of the default fill. Alpha is always zero.
pub const DEFAULT_FILL: [u8; 3] = [255, 255, 255];

/// Pre-encoded transparent tile payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankTile {
    data: Vec<u8>,
    size: u32,
}

impl BlankTile {
    /// Encode a transparent `size`×`size` tile with the default white fill.
    pub fn transparent(size: u32) -> Result<Self, BlankTileError> {
        Self::encode(size, DEFAULT_FILL)
    }

    /// Encode a transparent `size`×`size` tile.
    ///
    /// `fill` sets the RGB channels stored under a zero alpha. It never shows,
    /// but some viewers use it when blending the tile edges.
    ///
    /// # Errors
    ///
    /// Returns `BlankTileError::InvalidSize` when `size` is 0 or above
    /// [`MAX_TILE_SIZE`], or `BlankTileError::Encode` if PNG encoding fails.
    pub fn encode(size: u32, fill: [u8; 3]) -> Result<Self, BlankTileError> {
        if size == 0 || size > MAX_TILE_SIZE {
            return Err(BlankTileError::InvalidSize(size));
        }

        let image = RgbaImage::from_pixel(size, size, Rgba([fill[0], fill[1], fill[2], 0]));

        let mut data = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut data, CompressionType::Best, FilterType::Adaptive);
        encoder.write_image(image.as_raw(), size, size, ExtendedColorType::Rgba8)?;

        Ok(Self { data, size })
    }

    /// Encoded PNG bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Edge length in pixels.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Encoded length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
