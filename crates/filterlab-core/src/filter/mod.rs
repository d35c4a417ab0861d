//! Pixel filters: pure grid-to-grid transforms.
//!
//! Every filter reads a [`crate::PixelGrid`] and produces a fresh grid of the
//! same dimensions; inputs are never mutated. Passing the degenerate empty
//! grid is a precondition violation — callers (see [`crate::pipeline`]) must
//! check and skip before dispatching.
//!
//! # Channel Clamping
//!
//! All filters that leave integer arithmetic share one clamp rule: values
//! below 0 become 0, values above 255 become 255, everything else rounds to
//! the nearest integer. Parameter ranges (posterize bits, threshold level,
//! gamma) are clamped the same way rather than rejected.

mod convolve;
mod point;
mod tone;

pub use convolve::{convolve, Kernel, KernelError};
pub use point::{
    brightness, contrast, grayscale, invert, posterize, remove_green, sepia, swap_red_blue,
    threshold,
};
pub use tone::{gamma, GammaLut};

/// Clamp an arithmetic result into a valid channel value.
///
/// Below 0 clamps to 0, above 255 clamps to 255, in-range values round to
/// the nearest integer.
#[inline]
pub(crate) fn clamp_channel(x: f32) -> u8 {
    if x < 0.0 {
        0
    } else if x > 255.0 {
        255
    } else {
        x.round() as u8
    }
}
