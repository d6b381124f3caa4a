//! netpbm Core - Basic data structures for netpbm rasters
//!
//! This crate provides the in-memory representation shared by the codec
//! and the filters:
//!
//! - [`Raster`] - Decoded image: header fields plus planes
//! - [`Channels`] - Either three color planes or one gray plane
//! - [`Plane`] / [`RgbPlanes`] - Row-major 8-bit sample grids
//! - [`Encoding`] - Container signature (`P2`, `P3`, `P5`, `P6`)

pub mod encoding;
pub mod error;
pub mod raster;

pub use encoding::{ChannelMode, DataMode, Encoding};
pub use error::{Error, Result};
pub use raster::{Channels, Plane, Raster, RgbPlanes};

/// Largest sample value. Filters clamp to this regardless of the header's
/// max-value text.
pub const MAX_SAMPLE: i32 = 255;
