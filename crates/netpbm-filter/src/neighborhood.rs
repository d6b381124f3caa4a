//! 3x3 neighborhood operations
//!
//! - Sharpen: `5*c - up - down - left - right`
//! - Smooth: mean of the 3x3 block including the center (integer division)
//!
//! Both write into freshly allocated planes that are swapped in once
//! every sample is computed, so each output depends only on input values.
//! Pixels on the first/last row and first/last column are set to 0 in all
//! channels; rasters narrower or shorter than 3 are therefore all 0.

use crate::FilterResult;
use crate::clamp::store_clamped;
use log::trace;
use netpbm_core::{Plane, Raster, RgbPlanes};

/// Sharpen with the 4-neighbor Laplacian kernel.
///
/// # Errors
///
/// Returns a core `UnsupportedChannels` error for a gray raster.
pub fn sharpen(raster: Raster) -> FilterResult<Raster> {
    apply_interior(raster, |p, x, y| {
        5 * at(p, x, y) - at(p, x, y - 1) - at(p, x, y + 1) - at(p, x - 1, y) - at(p, x + 1, y)
    })
}

/// Smooth with a 3x3 box average.
pub fn smooth(raster: Raster) -> FilterResult<Raster> {
    apply_interior(raster, |p, x, y| {
        let mut sum = 0;
        for sy in y - 1..=y + 1 {
            for sx in x - 1..=x + 1 {
                sum += at(p, sx, sy);
            }
        }
        sum / 9
    })
}

#[inline]
fn at(plane: &Plane, x: u32, y: u32) -> i32 {
    plane.get_unchecked(x, y) as i32
}

/// Evaluate `kernel` on every interior pixel of each color plane, leaving
/// border pixels at 0, then swap the result into the raster.
fn apply_interior<F>(mut raster: Raster, kernel: F) -> FilterResult<Raster>
where
    F: Fn(&Plane, u32, u32) -> i32,
{
    let src = raster.rgb()?;
    let (w, h) = (src.width(), src.height());
    let mut out = RgbPlanes::new(w, h)?;

    if w >= 3 && h >= 3 {
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let candidate = (
                    kernel(&src.red, x, y),
                    kernel(&src.green, x, y),
                    kernel(&src.blue, x, y),
                );
                store_clamped(&mut out, x, y, candidate);
            }
        }
    } else {
        trace!("neighborhood filter: {w}x{h} has no interior pixels");
    }

    raster.replace_rgb(out)?;
    Ok(raster)
}
