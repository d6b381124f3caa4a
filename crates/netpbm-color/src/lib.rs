//! netpbm Color - Tonal conversions producing a gray plane
//!
//! - **Grayscale** ([`grayscale`]): weighted luminance of the color planes
//! - **Contrast** ([`contrast`]): grayscale followed by a linear stretch of
//!   the observed gray range onto 0..=255

pub mod contrast;
pub mod error;
pub mod grayscale;

// Re-export core types
pub use netpbm_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use contrast::{contrast, stretch_contrast};
pub use grayscale::{GrayRange, gray_plane, grayscale, grayscale_with_range, rgb_to_gray};
