//! netpbm-filter - Pixel transforms on decoded rasters
//!
//! This crate provides the filters applied between decode and encode:
//!
//! - Point operations: [`negate`], [`brighten`]
//! - 3x3 neighborhood operations: [`sharpen`], [`smooth`]
//! - Tonal conversions re-exported from `netpbm-color`: [`grayscale`], [`contrast`]
//! - Single-filter dispatch: [`Operation`] and [`apply_filter`]
//!
//! Every filter takes an owned [`Raster`](netpbm_core::Raster) and returns one.

pub mod clamp;
mod error;
pub mod neighborhood;
pub mod operation;
pub mod point;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use clamp::{clamp_sample, store_clamped};
pub use neighborhood::{sharpen, smooth};
pub use netpbm_color::{contrast, grayscale};
pub use operation::{Operation, apply_filter};
pub use point::{brighten, negate};
