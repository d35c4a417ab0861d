//! Filterlab Core - Pixel transform library
//!
//! This crate provides the core pixel processing functionality for Filterlab:
//! a packed-pixel codec, a library of pure grid-to-grid filters, nearest
//! neighbor scaling, a synthetic test image, and a pipeline runner that hands
//! named outputs to an external sink.

pub mod codec;
pub mod filter;
pub mod pipeline;
pub mod scale;
pub mod synth;

pub use codec::{pack, unpack_blue, unpack_green, unpack_red, GridError};
pub use filter::{
    brightness, contrast, convolve, gamma, grayscale, invert, posterize, remove_green, sepia,
    swap_red_blue, threshold, GammaLut, Kernel, KernelError,
};
pub use pipeline::{ImageSink, OutputSet, PipelineError, PipelineReport, SinkError};
pub use scale::scale;
pub use synth::smiley;

/// A single RGB pixel with explicit 8-bit channels.
///
/// Internally pixels carry separate channel fields; the packed `0xRRGGBB`
/// integer form only appears at the [`codec`] boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pixel {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Pixel {
    /// Create a pixel from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray pixel with all channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// A rectangular grid of pixels in row-major order.
///
/// The flat storage makes the rectangular invariant hold by construction:
/// every row has exactly `width` pixels. A grid with zero width or height is
/// the degenerate "no image" value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Grid width in pixels.
    width: u32,
    /// Grid height in pixels.
    height: u32,
    /// Row-major pixel data. Length is width * height.
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a grid from row-major pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create the degenerate empty grid.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// Create a grid with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/degenerate grid.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Get the pixel at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "Pixel out of bounds");
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Iterate over rows as pixel slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Row-major view of all pixels.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Build a new grid of the same dimensions by mapping every pixel.
    ///
    /// Shared per-pixel loop for the point filters; the input is never
    /// mutated.
    pub fn map_pixels<F>(&self, f: F) -> PixelGrid
    where
        F: Fn(Pixel) -> Pixel,
    {
        PixelGrid {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }
}
