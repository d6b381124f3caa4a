//! Error types for netpbm-filter
//!
//! Filters fail only when handed a raster in the wrong channel mode or
//! when a replacement plane cannot be allocated.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] netpbm_core::Error),

    /// Error from the grayscale/contrast conversions
    #[error("color error: {0}")]
    Color(#[from] netpbm_color::ColorError),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
