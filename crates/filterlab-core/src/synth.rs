//! Synthetic test image: a fixed 8x8 smiley face.
//!
//! Network-independent fixture for exercising filters and the pipeline
//! without an external image source. Typically scaled by a factor of 20
//! before being handed to a sink.

use crate::{Pixel, PixelGrid};

const BLACK: Pixel = Pixel::new(0x00, 0x00, 0x00);
const YELLOW: Pixel = Pixel::new(0xFF, 0xFF, 0x00);
const BLUE: Pixel = Pixel::new(0x00, 0x00, 0xFF);

/// Build the fixed 8x8 smiley face grid.
///
/// Deterministic and parameterless; uses exactly three colors (black border
/// and background, yellow face, blue eyes and mouth).
pub fn smiley() -> PixelGrid {
    const K: Pixel = BLACK;
    const Y: Pixel = YELLOW;
    const U: Pixel = BLUE;

    #[rustfmt::skip]
    let rows: [[Pixel; 8]; 8] = [
        [K, K, K, K, K, K, K, K],
        [K, Y, Y, Y, Y, Y, Y, K],
        [K, Y, U, Y, Y, U, Y, K],
        [K, Y, Y, Y, Y, Y, Y, K],
        [K, Y, U, Y, Y, U, Y, K],
        [K, Y, Y, U, U, Y, Y, K],
        [K, Y, Y, Y, Y, Y, Y, K],
        [K, K, K, K, K, K, K, K],
    ];

    PixelGrid::new(8, 8, rows.into_iter().flatten().collect())
}
