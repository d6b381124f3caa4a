//! Single-filter dispatch
//!
//! One invocation applies at most one filter. [`Operation`] names it,
//! carrying the brighten amount where needed, and [`apply_filter`] runs it.

use crate::{FilterResult, brighten, negate, sharpen, smooth};
use log::debug;
use netpbm_core::{ChannelMode, Raster};
use std::fmt;

/// The filter to run between decode and encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Pass the raster through unchanged
    #[default]
    None,
    /// `255 - v`
    Negate,
    /// `clamp(v + amount)`
    Brighten(i32),
    /// 4-neighbor Laplacian sharpen, border set to 0
    Sharpen,
    /// 3x3 box average, border set to 0
    Smooth,
    /// Weighted luminance to a gray plane
    Grayscale,
    /// Grayscale followed by a linear range stretch
    Contrast,
}

impl Operation {
    /// Channel mode of the raster this operation produces from a color input.
    pub fn output_channels(self) -> ChannelMode {
        match self {
            Operation::Grayscale | Operation::Contrast => ChannelMode::Gray,
            _ => ChannelMode::Color,
        }
    }

    /// Whether the output is a gray raster.
    pub fn yields_gray(self) -> bool {
        self.output_channels() == ChannelMode::Gray
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::None => write!(f, "none"),
            Operation::Negate => write!(f, "negate"),
            Operation::Brighten(amount) => write!(f, "brighten({amount})"),
            Operation::Sharpen => write!(f, "sharpen"),
            Operation::Smooth => write!(f, "smooth"),
            Operation::Grayscale => write!(f, "grayscale"),
            Operation::Contrast => write!(f, "contrast"),
        }
    }
}

/// Run `op` on `raster`.
///
/// # Errors
///
/// Every operation other than [`Operation::None`] requires a color raster.
pub fn apply_filter(raster: Raster, op: Operation) -> FilterResult<Raster> {
    debug!(
        "apply_filter: {} on {}x{} {}",
        op,
        raster.width(),
        raster.height(),
        raster.channel_mode()
    );
    match op {
        Operation::None => Ok(raster),
        Operation::Negate => negate(raster),
        Operation::Brighten(amount) => brighten(raster, amount),
        Operation::Sharpen => sharpen(raster),
        Operation::Smooth => smooth(raster),
        Operation::Grayscale => Ok(netpbm_color::grayscale(raster)?),
        Operation::Contrast => Ok(netpbm_color::contrast(raster)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpbm_core::Encoding;

    fn sample() -> Raster {
        let mut raster = Raster::new(Encoding::AsciiColor, 3, 3, "255").unwrap();
        let rgb = raster.rgb_mut().unwrap();
        for y in 0..3 {
            for x in 0..3 {
                rgb.set_rgb(x, y, (x * 40) as u8, (y * 40) as u8, 100).unwrap();
            }
        }
        raster
    }

    #[test]
    fn test_none_passes_through() {
        let original = sample();
        assert_eq!(apply_filter(original.clone(), Operation::None).unwrap(), original);
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        assert_eq!(
            apply_filter(sample(), Operation::Negate).unwrap(),
            negate(sample()).unwrap()
        );
        assert_eq!(
            apply_filter(sample(), Operation::Brighten(-7)).unwrap(),
            brighten(sample(), -7).unwrap()
        );
        assert_eq!(
            apply_filter(sample(), Operation::Sharpen).unwrap(),
            sharpen(sample()).unwrap()
        );
        assert_eq!(
            apply_filter(sample(), Operation::Smooth).unwrap(),
            smooth(sample()).unwrap()
        );
    }

    #[test]
    fn test_output_channels() {
        for op in [
            Operation::None,
            Operation::Negate,
            Operation::Brighten(3),
            Operation::Sharpen,
            Operation::Smooth,
        ] {
            assert!(!op.yields_gray());
            let out = apply_filter(sample(), op).unwrap();
            assert_eq!(out.channel_mode(), ChannelMode::Color);
        }
        for op in [Operation::Grayscale, Operation::Contrast] {
            assert!(op.yields_gray());
            let out = apply_filter(sample(), op).unwrap();
            assert_eq!(out.channel_mode(), ChannelMode::Gray);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::Brighten(-3).to_string(), "brighten(-3)");
        assert_eq!(Operation::default().to_string(), "none");
    }
}
