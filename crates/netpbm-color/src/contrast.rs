//! Contrast stretching
//!
//! Converts to gray, then maps the observed range `[min, max]` linearly
//! onto `[0, 255]`:
//!
//! ```text
//! scale = 255.0 / (max - min)
//! out   = trunc(scale * (gray - min)), capped at 255
//! ```
//!
//! A flat image (`max == min`) has no range to stretch; every output
//! sample is 0.

use crate::ColorResult;
use crate::grayscale::{GrayRange, grayscale_with_range};
use log::{debug, warn};
use netpbm_core::{Plane, Raster};

/// Stretch a gray plane in place from `range` onto 0..=255.
pub fn stretch_contrast(plane: &mut Plane, range: GrayRange) {
    if range.is_flat() {
        warn!(
            "contrast: flat image (every gray sample is {}), output is all 0",
            range.min
        );
        plane.data_mut().fill(0);
        return;
    }

    let min = range.min as i32;
    let scale = 255.0 / (range.max as i32 - min) as f64;
    debug!(
        "contrast: range {}..={} scale {:.4}",
        range.min, range.max, scale
    );

    for v in plane.data_mut() {
        let stretched = scale * (*v as i32 - min) as f64;
        *v = if stretched > 255.0 {
            255
        } else {
            stretched as u8
        };
    }
}

/// Grayscale a color raster and stretch its contrast.
///
/// The result is a gray raster.
pub fn contrast(raster: Raster) -> ColorResult<Raster> {
    let (mut raster, range) = grayscale_with_range(raster)?;
    stretch_contrast(raster.gray_mut()?, range);
    Ok(raster)
}
