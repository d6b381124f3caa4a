//! netpbm - Decode, filter and re-encode PPM images
//!
//! Reads an ASCII (`P3`) or binary (`P6`) color image, applies at most one
//! filter, and writes the result as `P2`, `P3`, `P5` or `P6`.
//!
//! # Example
//!
//! ```
//! use netpbm::{DataMode, Encoding, filter::Operation, process};
//!
//! let input = b"P6\n1 1\n255\n\x64\x96\xc8";
//! let mut output = Vec::new();
//! let encoding = process(&input[..], Operation::Negate, DataMode::Binary, &mut output).unwrap();
//! assert_eq!(encoding, Encoding::BinaryColor);
//! assert_eq!(output, b"P6\n1 1\n255\n\x9b\x69\x37");
//! ```

pub mod cli;
mod error;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use netpbm_core::{
    ChannelMode, Channels, DataMode, Encoding, Error, MAX_SAMPLE, Plane, Raster, Result,
    RgbPlanes, encoding, raster,
};

// Re-export domain crates as modules to avoid name conflicts
pub use netpbm_color as color;
pub use netpbm_filter as filter;
pub use netpbm_io as io;

pub use error::{PipelineError, PipelineResult};
pub use pipeline::{output_encoding, process};
