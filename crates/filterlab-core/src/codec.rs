//! Packed-pixel codec: the `0xRRGGBB` integer boundary.
//!
//! Inside the crate a pixel is a three-field struct; external collaborators
//! (loaders, savers) speak packed 24-bit integers or `image::RgbImage`
//! buffers. All conversions between the two worlds live here.
//!
//! Packing layout: bits 16-23 red, bits 8-15 green, bits 0-7 blue.

use thiserror::Error;

use crate::{Pixel, PixelGrid};

/// Error types for grid construction from external data.
#[derive(Debug, Error)]
pub enum GridError {
    /// The supplied rows do not all have the same length.
    #[error("Row {row} has {len} pixels, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
}

/// Pack three channel values into a `0xRRGGBB` integer.
///
/// Each channel is masked to its low 8 bits before packing. Values outside
/// 0-255 are silently truncated via bitwise AND, not clamped or rejected;
/// this is the documented contract for out-of-range inputs.
#[inline]
pub fn pack(r: u32, g: u32, b: u32) -> u32 {
    ((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)
}

/// Extract the red channel from a packed pixel.
#[inline]
pub fn unpack_red(packed: u32) -> u8 {
    ((packed >> 16) & 0xFF) as u8
}

/// Extract the green channel from a packed pixel.
#[inline]
pub fn unpack_green(packed: u32) -> u8 {
    ((packed >> 8) & 0xFF) as u8
}

/// Extract the blue channel from a packed pixel.
#[inline]
pub fn unpack_blue(packed: u32) -> u8 {
    (packed & 0xFF) as u8
}

impl Pixel {
    /// Decode a pixel from its packed `0xRRGGBB` form.
    ///
    /// Bits above 23 are ignored, so any well-formed packed value round-trips
    /// exactly.
    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: unpack_red(packed),
            g: unpack_green(packed),
            b: unpack_blue(packed),
        }
    }

    /// Encode this pixel into its packed `0xRRGGBB` form.
    #[inline]
    pub fn to_packed(self) -> u32 {
        pack(self.r as u32, self.g as u32, self.b as u32)
    }
}

impl PixelGrid {
    /// Build a grid from rows of packed `0xRRGGBB` integers.
    ///
    /// Zero rows, or a first row of zero length, produce the degenerate empty
    /// grid. Rows of unequal length are rejected with
    /// [`GridError::RaggedRows`].
    pub fn from_packed_rows(rows: &[Vec<u32>]) -> Result<Self, GridError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Ok(Self::empty());
        }

        let width = rows[0].len();
        let mut pixels = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            pixels.extend(values.iter().map(|&v| Pixel::from_packed(v)));
        }

        Ok(Self::new(width as u32, rows.len() as u32, pixels))
    }

    /// Serialize the grid as rows of packed `0xRRGGBB` integers.
    pub fn to_packed_rows(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(|p| p.to_packed()).collect())
            .collect()
    }

    /// Create a grid from an `image::RgbImage` produced by an external codec.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Pixel::new(p.0[0], p.0[1], p.0[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Convert to an `image::RgbImage` for encoding by an external codec.
    ///
    /// Returns `None` for the degenerate empty grid.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        if self.is_empty() {
            return None;
        }
        let mut raw = Vec::with_capacity(self.pixel_count() * 3);
        for p in self.pixels() {
            raw.extend_from_slice(&[p.r, p.g, p.b]);
        }
        image::RgbImage::from_raw(self.width(), self.height(), raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        assert_eq!(pack(0xAA, 0xBB, 0xCC), 0xAABBCC);
        assert_eq!(pack(0, 0, 0), 0x000000);
        assert_eq!(pack(255, 255, 255), 0xFFFFFF);
    }

    #[test]
    fn test_unpack_channels() {
        assert_eq!(unpack_red(0xAABBCC), 0xAA);
        assert_eq!(unpack_green(0xAABBCC), 0xBB);
        assert_eq!(unpack_blue(0xAABBCC), 0xCC);
    }

    #[test]
    fn test_pack_truncates_out_of_range() {
        // 0x1FF & 0xFF == 0xFF, truncation rather than clamping
        assert_eq!(pack(0x1FF, 0x100, 0x102), pack(0xFF, 0x00, 0x02));
    }

    #[test]
    fn test_pixel_packed_round_trip() {
        let p = Pixel::new(0x12, 0x34, 0x56);
        assert_eq!(Pixel::from_packed(p.to_packed()), p);
        assert_eq!(p.to_packed(), 0x123456);
    }

    #[test]
    fn test_from_packed_ignores_high_bits() {
        assert_eq!(Pixel::from_packed(0xFF123456), Pixel::from_packed(0x123456));
    }

    #[test]
    fn test_packed_rows_round_trip() {
        let rows = vec![vec![0xAABBCC, 0x102030], vec![0x000000, 0xFFFFFF]];
        let grid = PixelGrid::from_packed_rows(&rows).unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.to_packed_rows(), rows);
    }

    #[test]
    fn test_packed_rows_degenerate_inputs() {
        assert!(PixelGrid::from_packed_rows(&[]).unwrap().is_empty());
        assert!(PixelGrid::from_packed_rows(&[vec![]]).unwrap().is_empty());
    }

    #[test]
    fn test_packed_rows_ragged_rejected() {
        let rows = vec![vec![1, 2, 3], vec![4, 5]];
        let err = PixelGrid::from_packed_rows(&rows).unwrap_err();
        match err {
            GridError::RaggedRows { row, len, expected } => {
                assert_eq!((row, len, expected), (1, 2, 3));
            }
        }
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let rows = vec![vec![0xAABBCC, 0x102030], vec![0x000000, 0xFFFFFF]];
        let grid = PixelGrid::from_packed_rows(&rows).unwrap();
        let img = grid.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(PixelGrid::from_rgb_image(img), grid);
    }

    #[test]
    fn test_empty_grid_has_no_rgb_image() {
        assert!(PixelGrid::empty().to_rgb_image().is_none());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
