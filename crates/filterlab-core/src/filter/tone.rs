//! Gamma tone mapping via a pre-computed lookup table.

use super::clamp_channel;
use crate::{Pixel, PixelGrid};

// ============================================================================
// LUT Type
// ============================================================================

/// Pre-computed 256-entry lookup table for gamma correction.
#[derive(Debug, Clone)]
pub struct GammaLut {
    /// LUT values: lut[input] = output
    pub lut: [u8; 256],
}

impl GammaLut {
    /// Generate the LUT for a gamma value.
    ///
    /// Each entry is `clamp(255 * (i / 255) ^ (1 / gamma))`. Gamma values
    /// below 0.1 are clamped to 0.1, so the exponent never divides by zero.
    pub fn from_gamma(gamma: f32) -> Self {
        let gamma = gamma.max(0.1);

        // Fast path for the neutral gamma
        if gamma == 1.0 {
            return Self::identity();
        }

        let exponent = 1.0 / gamma;
        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            let normalized = i as f32 / 255.0;
            *lut_value = clamp_channel(255.0 * normalized.powf(exponent));
        }

        Self { lut }
    }

    /// Create identity LUT (no change).
    pub fn identity() -> Self {
        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            *lut_value = i as u8;
        }
        Self { lut }
    }

    /// Check if this LUT is identity.
    pub fn is_identity(&self) -> bool {
        self.lut.iter().enumerate().all(|(i, &v)| v == i as u8)
    }

    /// Apply the LUT to every channel of a grid.
    pub fn apply(&self, grid: &PixelGrid) -> PixelGrid {
        // Early exit for identity
        if self.is_identity() {
            return grid.clone();
        }

        grid.map_pixels(|p| {
            Pixel::new(
                self.lut[p.r as usize],
                self.lut[p.g as usize],
                self.lut[p.b as usize],
            )
        })
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::identity()
    }
}

/// Gamma-correct a grid.
///
/// Builds the lookup table for `gamma` and applies it per channel. Callers
/// that reuse one gamma across many grids can hold a [`GammaLut`] instead.
pub fn gamma(grid: &PixelGrid, gamma: f32) -> PixelGrid {
    GammaLut::from_gamma(gamma).apply(grid)
}

// ============================================================================
// Tests
// ============================================================================
