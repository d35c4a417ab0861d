//! Per-pixel point filters.
//!
//! Each filter visits every pixel exactly once and depends only on that
//! pixel's channels; neighborhood operations live in the convolve module.

use super::clamp_channel;
use crate::{Pixel, PixelGrid};

/// Average the three channels into a gray value.
///
/// gray = floor((R + G + B) / 3), applied to all three output channels.
pub fn grayscale(grid: &PixelGrid) -> PixelGrid {
    grid.map_pixels(|p| {
        let gray = ((p.r as u16 + p.g as u16 + p.b as u16) / 3) as u8;
        Pixel::gray(gray)
    })
}

/// Invert every channel.
///
/// Equivalent to XORing the packed form with 0xFFFFFF, so applying it twice
/// restores the original grid.
pub fn invert(grid: &PixelGrid) -> PixelGrid {
    grid.map_pixels(|p| Pixel::new(!p.r, !p.g, !p.b))
}

/// Force the green channel to zero, leaving red and blue unchanged.
///
/// Equivalent to ANDing the packed form with 0xFF00FF.
pub fn remove_green(grid: &PixelGrid) -> PixelGrid {
    grid.map_pixels(|p| Pixel::new(p.r, 0, p.b))
}

/// Exchange the red and blue channels; green is unchanged.
pub fn swap_red_blue(grid: &PixelGrid) -> PixelGrid {
    grid.map_pixels(|p| Pixel::new(p.b, p.g, p.r))
}

/// Reduce each channel to its top `keep_bits` bits.
///
/// `keep_bits` is clamped to 1-8. The low bits are dropped by masking, not
/// rounded, so `keep_bits = 8` is the identity transform.
pub fn posterize(grid: &PixelGrid, keep_bits: u8) -> PixelGrid {
    let keep_bits = keep_bits.clamp(1, 8) as u32;
    let mask = (0xFFu32 & !((1u32 << (8 - keep_bits)) - 1)) as u8;
    grid.map_pixels(|p| Pixel::new(p.r & mask, p.g & mask, p.b & mask))
}

/// Binarize to pure black or white against a gray threshold.
///
/// `t` is clamped to 0-255. Pixels whose gray value (as in [`grayscale`])
/// is at least `t` become white, all others black.
pub fn threshold(grid: &PixelGrid, t: i32) -> PixelGrid {
    let t = t.clamp(0, 255) as u16;
    grid.map_pixels(|p| {
        let gray = (p.r as u16 + p.g as u16 + p.b as u16) / 3;
        if gray >= t {
            Pixel::gray(255)
        } else {
            Pixel::gray(0)
        }
    })
}

/// Shift every channel by `delta`, clamping to the valid range.
pub fn brightness(grid: &PixelGrid, delta: i32) -> PixelGrid {
    grid.map_pixels(|p| {
        Pixel::new(
            (p.r as i32 + delta).clamp(0, 255) as u8,
            (p.g as i32 + delta).clamp(0, 255) as u8,
            (p.b as i32 + delta).clamp(0, 255) as u8,
        )
    })
}

/// Scale each channel's distance from mid-gray by `factor`.
///
/// output = 128 + factor * (channel - 128), clamped. A factor of 1.0 is the
/// identity; factors above 1.0 increase contrast, below 1.0 flatten it.
pub fn contrast(grid: &PixelGrid, factor: f32) -> PixelGrid {
    grid.map_pixels(|p| {
        Pixel::new(
            clamp_channel(128.0 + factor * (p.r as f32 - 128.0)),
            clamp_channel(128.0 + factor * (p.g as f32 - 128.0)),
            clamp_channel(128.0 + factor * (p.b as f32 - 128.0)),
        )
    })
}

/// Apply the classic sepia tone matrix.
pub fn sepia(grid: &PixelGrid) -> PixelGrid {
    grid.map_pixels(|p| {
        let (r, g, b) = (p.r as f32, p.g as f32, p.b as f32);
        Pixel::new(
            clamp_channel(0.393 * r + 0.769 * g + 0.189 * b),
            clamp_channel(0.349 * r + 0.686 * g + 0.168 * b),
            clamp_channel(0.272 * r + 0.534 * g + 0.131 * b),
        )
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
