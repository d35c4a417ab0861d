//! Nearest-neighbor integer upscaling.

use crate::PixelGrid;

/// Scale a grid up by an integer factor using nearest-neighbor replication.
///
/// Each source pixel becomes a `factor` x `factor` block; no interpolation.
/// A factor of 0 or an empty input yields the empty grid, a factor of 1
/// returns an independent deep copy.
pub fn scale(grid: &PixelGrid, factor: u32) -> PixelGrid {
    if factor == 0 || grid.is_empty() {
        return PixelGrid::empty();
    }
    if factor == 1 {
        return grid.clone();
    }

    let (width, height) = grid.dimensions();
    let new_w = width * factor;
    let new_h = height * factor;

    let mut pixels = Vec::with_capacity((new_w as usize) * (new_h as usize));
    for y in 0..new_h {
        for x in 0..new_w {
            pixels.push(grid.get(x / factor, y / factor));
        }
    }

    PixelGrid::new(new_w, new_h, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
