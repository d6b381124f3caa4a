//! RGB -> Grayscale
//!
//! Luminance uses fixed weights 0.3 (red), 0.6 (green) and 0.1 (blue).
//! The weighted sum is rounded half-up; sums above 255 become 255.

use crate::ColorResult;
use log::debug;
use netpbm_core::{Plane, Raster, RgbPlanes};

const RED_WEIGHT: f64 = 0.3;
const GREEN_WEIGHT: f64 = 0.6;
const BLUE_WEIGHT: f64 = 0.1;

/// Smallest and largest gray sample seen during a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayRange {
    pub min: u8,
    pub max: u8,
}

impl GrayRange {
    /// Whether every sample had the same value.
    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }
}

/// Convert one RGB triple to gray.
///
/// # Examples
///
/// ```
/// use netpbm_color::rgb_to_gray;
///
/// assert_eq!(rgb_to_gray(255, 255, 255), 255);
/// assert_eq!(rgb_to_gray(0, 0, 0), 0);
/// assert_eq!(rgb_to_gray(100, 150, 200), 140);
/// ```
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let value = r as f64 * RED_WEIGHT + g as f64 * GREEN_WEIGHT + b as f64 * BLUE_WEIGHT;
    if value > 255.0 {
        255
    } else {
        (value + 0.5) as u8
    }
}

/// Build a gray plane from color planes, tracking the gray range.
pub fn gray_plane(rgb: &RgbPlanes) -> ColorResult<(Plane, GrayRange)> {
    let (w, h) = (rgb.width(), rgb.height());
    let mut gray = Plane::new(w, h)?;

    // Start outside the sample range so the first pixel sets both ends
    let mut min = 256i32;
    let mut max = -1i32;

    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = rgb.get_rgb_unchecked(x, y);
            let v = rgb_to_gray(r, g, b);
            gray.set_unchecked(x, y, v);
            min = min.min(v as i32);
            max = max.max(v as i32);
        }
    }

    let range = GrayRange {
        min: min as u8,
        max: max as u8,
    };
    Ok((gray, range))
}

/// Convert a color raster to gray, also returning the gray range.
///
/// The returned raster is in gray mode; its color planes are released.
///
/// # Errors
///
/// Returns a core `UnsupportedChannels` error for a raster that is
/// already gray.
pub fn grayscale_with_range(mut raster: Raster) -> ColorResult<(Raster, GrayRange)> {
    let (gray, range) = gray_plane(raster.rgb()?)?;
    raster.set_gray(gray)?;
    debug!("grayscale: range {}..={}", range.min, range.max);
    Ok((raster, range))
}

/// Convert a color raster to gray.
pub fn grayscale(raster: Raster) -> ColorResult<Raster> {
    grayscale_with_range(raster).map(|(raster, _)| raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpbm_core::{ChannelMode, Encoding};

    fn color_raster(pixels: &[(u8, u8, u8)], w: u32, h: u32) -> Raster {
        let mut raster = Raster::new(Encoding::BinaryColor, w, h, "255").unwrap();
        let rgb = raster.rgb_mut().unwrap();
        for (i, &(r, g, b)) in pixels.iter().enumerate() {
            let i = i as u32;
            rgb.set_rgb(i % w, i / w, r, g, b).unwrap();
        }
        raster
    }

    #[test]
    fn test_rgb_to_gray_extremes() {
        assert_eq!(rgb_to_gray(255, 255, 255), 255);
        assert_eq!(rgb_to_gray(0, 0, 0), 0);
    }

    #[test]
    fn test_rgb_to_gray_weights() {
        assert_eq!(rgb_to_gray(10, 0, 0), 3);
        assert_eq!(rgb_to_gray(0, 10, 0), 6);
        assert_eq!(rgb_to_gray(0, 0, 10), 1);
    }

    #[test]
    fn test_rgb_to_gray_rounds_half_up() {
        // 0.3 * 5 = 1.5
        assert_eq!(rgb_to_gray(5, 0, 0), 2);
        // 0.1 * 4 = 0.4
        assert_eq!(rgb_to_gray(0, 0, 4), 0);
    }

    #[test]
    fn test_gray_plane_range() {
        let raster = color_raster(&[(0, 0, 0), (100, 150, 200), (255, 255, 255)], 3, 1);
        let (gray, range) = gray_plane(raster.rgb().unwrap()).unwrap();
        assert_eq!(gray.data(), &[0, 140, 255]);
        assert_eq!(range, GrayRange { min: 0, max: 255 });
    }

    #[test]
    fn test_gray_plane_single_pixel_range() {
        let raster = color_raster(&[(100, 150, 200)], 1, 1);
        let (_, range) = gray_plane(raster.rgb().unwrap()).unwrap();
        assert_eq!(range, GrayRange { min: 140, max: 140 });
        assert!(range.is_flat());
    }

    #[test]
    fn test_grayscale_switches_mode() {
        let raster = color_raster(&[(10, 20, 30); 4], 2, 2);
        let gray = grayscale(raster).unwrap();
        assert_eq!(gray.channel_mode(), ChannelMode::Gray);
        assert_eq!(gray.encoding(), Encoding::BinaryGray);
        // 3 + 12 + 3 = 18
        assert!(gray.gray().unwrap().data().iter().all(|&v| v == 18));
    }

    #[test]
    fn test_grayscale_rejects_gray_input() {
        let raster = Raster::new(Encoding::AsciiGray, 2, 2, "255").unwrap();
        assert!(grayscale(raster).is_err());
    }
}
