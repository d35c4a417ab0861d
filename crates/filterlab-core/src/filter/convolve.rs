//! 3x3 convolution with named kernel presets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::clamp_channel;
use crate::{Pixel, PixelGrid};

/// Error types for kernel construction.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A kernel slice did not contain exactly 9 weights.
    #[error("Kernel requires exactly 9 weights, got {0}")]
    WeightCount(usize),
}

/// A 3x3 convolution kernel: 9 weights in row-major order, a divisor, and an
/// offset added after division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kernel {
    weights: [i32; 9],
    divisor: i32,
    offset: i32,
}

impl Kernel {
    /// Create a kernel from its 9 weights.
    ///
    /// The divisor defaults to the weight sum, falling back to 1 when the sum
    /// is zero (edge-detection kernels). Offset defaults to 0.
    pub fn new(weights: [i32; 9]) -> Self {
        let sum: i32 = weights.iter().sum();
        Self {
            weights,
            divisor: if sum == 0 { 1 } else { sum },
            offset: 0,
        }
    }

    /// Create a kernel from a weight slice, failing fast unless it holds
    /// exactly 9 weights.
    pub fn from_weights(weights: &[i32]) -> Result<Self, KernelError> {
        let weights: [i32; 9] = weights
            .try_into()
            .map_err(|_| KernelError::WeightCount(weights.len()))?;
        Ok(Self::new(weights))
    }

    /// Override the divisor. A zero divisor falls back to 1.
    pub fn with_divisor(mut self, divisor: i32) -> Self {
        self.divisor = if divisor == 0 { 1 } else { divisor };
        self
    }

    /// Set the offset added to each channel after division.
    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Box blur: nine equal weights, divisor 9.
    pub fn box_blur() -> Self {
        Self::new([1, 1, 1, 1, 1, 1, 1, 1, 1])
    }

    /// Sharpen: boosted center minus the 4-neighborhood, divisor 1.
    pub fn sharpen() -> Self {
        Self::new([0, -1, 0, -1, 5, -1, 0, -1, 0])
    }

    /// Simple edge detection: zero-sum Laplacian, divisor falls back to 1.
    pub fn simple_edge() -> Self {
        Self::new([0, -1, 0, -1, 4, -1, 0, -1, 0])
    }

    /// The 9 weights in row-major order.
    pub fn weights(&self) -> &[i32; 9] {
        &self.weights
    }

    /// The effective divisor (never zero).
    pub fn divisor(&self) -> i32 {
        self.divisor
    }

    /// The post-division offset.
    pub fn offset(&self) -> i32 {
        self.offset
    }
}

/// Convolve a grid with a 3x3 kernel.
///
/// Border pixels (first/last row and column) are copied unchanged from the
/// input. For interior pixels the 9 neighbors are accumulated per channel in
/// row-major order, then each channel becomes
/// `clamp(round(acc / divisor) + offset)`.
pub fn convolve(grid: &PixelGrid, kernel: &Kernel) -> PixelGrid {
    let (width, height) = grid.dimensions();

    // Start from a copy so the border is already in place. Grids narrower
    // than 3 pixels in either dimension are all border.
    let mut pixels = grid.pixels().to_vec();
    if width < 3 || height < 3 {
        return PixelGrid::new(width, height, pixels);
    }

    let divisor = kernel.divisor() as f32;
    let offset = kernel.offset() as f32;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut acc_r = 0i32;
            let mut acc_g = 0i32;
            let mut acc_b = 0i32;

            let mut k = 0;
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let p = grid.get((x as i32 + dx) as u32, (y as i32 + dy) as u32);
                    let w = kernel.weights()[k];
                    acc_r += p.r as i32 * w;
                    acc_g += p.g as i32 * w;
                    acc_b += p.b as i32 * w;
                    k += 1;
                }
            }

            let out = Pixel::new(
                clamp_channel((acc_r as f32 / divisor).round() + offset),
                clamp_channel((acc_g as f32 / divisor).round() + offset),
                clamp_channel((acc_b as f32 / divisor).round() + offset),
            );
            pixels[(y as usize) * (width as usize) + (x as usize)] = out;
        }
    }

    PixelGrid::new(width, height, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
