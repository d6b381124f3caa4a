//! Boundary clamp
//!
//! Restricts candidate sample values to `0..=255` before they are stored.
//! Shared by brighten, sharpen and smooth.

use netpbm_core::{MAX_SAMPLE, RgbPlanes};

/// Clamp an integer to the sample range.
#[inline]
pub fn clamp_sample(value: i32) -> u8 {
    value.clamp(0, MAX_SAMPLE) as u8
}

/// Clamp a candidate (red, green, blue) triple and store it at (x, y).
///
/// Each channel is clamped independently.
///
/// # Panics
///
/// Panics if (x, y) lies outside the planes.
#[inline]
pub fn store_clamped(planes: &mut RgbPlanes, x: u32, y: u32, (r, g, b): (i32, i32, i32)) {
    planes.set_rgb_unchecked(x, y, clamp_sample(r), clamp_sample(g), clamp_sample(b));
}
