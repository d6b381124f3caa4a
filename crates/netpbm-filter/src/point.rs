//! Point operations
//!
//! Each output sample depends only on the same input sample, so these
//! filters rewrite the color planes in place.

use crate::FilterResult;
use crate::clamp::clamp_sample;
use log::debug;
use netpbm_core::Raster;

/// Invert every sample: `out = 255 - in`.
///
/// Applying it twice restores the original raster.
///
/// # Errors
///
/// Returns a core `UnsupportedChannels` error for a gray raster.
pub fn negate(mut raster: Raster) -> FilterResult<Raster> {
    for plane in raster.rgb_mut()?.planes_mut() {
        for v in plane.data_mut() {
            *v = 255 - *v;
        }
    }
    Ok(raster)
}

/// Add `amount` to every sample, clamping to `0..=255`.
///
/// # Arguments
/// * `raster` - Color raster
/// * `amount` - Signed offset; negative values darken
pub fn brighten(mut raster: Raster, amount: i32) -> FilterResult<Raster> {
    debug!("brighten: amount {amount}");
    for plane in raster.rgb_mut()?.planes_mut() {
        for v in plane.data_mut() {
            *v = clamp_sample((*v as i32).saturating_add(amount));
        }
    }
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpbm_core::Encoding;

    fn create_test_color_image() -> Raster {
        let mut raster = Raster::new(Encoding::BinaryColor, 4, 3, "255").unwrap();
        let rgb = raster.rgb_mut().unwrap();
        for y in 0..3 {
            for x in 0..4 {
                let r = (x * 60) as u8;
                let g = (y * 100) as u8;
                let b = 250;
                rgb.set_rgb(x, y, r, g, b).unwrap();
            }
        }
        raster
    }

    #[test]
    fn test_negate_values() {
        let raster = negate(create_test_color_image()).unwrap();
        let rgb = raster.rgb().unwrap();
        assert_eq!(rgb.get_rgb(0, 0), Some((255, 255, 5)));
        assert_eq!(rgb.get_rgb(3, 2), Some((75, 55, 5)));
    }

    #[test]
    fn test_negate_twice_is_identity() {
        let original = create_test_color_image();
        let twice = negate(negate(original.clone()).unwrap()).unwrap();
        assert_eq!(twice, original);
    }

    #[test]
    fn test_brighten_zero_is_identity() {
        let original = create_test_color_image();
        assert_eq!(brighten(original.clone(), 0).unwrap(), original);
    }

    #[test]
    fn test_brighten_clamps_high() {
        let raster = brighten(create_test_color_image(), 10).unwrap();
        let rgb = raster.rgb().unwrap();
        // blue 250 + 10 stops at 255
        assert_eq!(rgb.get_rgb(0, 0), Some((10, 10, 255)));
        assert_eq!(rgb.get_rgb(1, 1), Some((70, 110, 255)));
    }

    #[test]
    fn test_brighten_clamps_low() {
        let raster = brighten(create_test_color_image(), -10).unwrap();
        let rgb = raster.rgb().unwrap();
        assert_eq!(rgb.get_rgb(0, 0), Some((0, 0, 240)));
        assert_eq!(rgb.get_rgb(1, 0), Some((50, 0, 240)));
    }

    #[test]
    fn test_brighten_extreme_amount() {
        let raster = brighten(create_test_color_image(), i32::MAX).unwrap();
        let rgb = raster.rgb().unwrap();
        assert!(rgb.red.data().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_point_ops_reject_gray() {
        let gray = Raster::new(Encoding::BinaryGray, 2, 2, "255").unwrap();
        assert!(negate(gray.clone()).is_err());
        assert!(brighten(gray, 5).is_err());
    }
}
