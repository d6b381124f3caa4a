//! netpbm-io - Codec for netpbm color and gray containers
//!
//! Decodes `P3` (ASCII color) and `P6` (binary color) images into a
//! [`Raster`], and encodes rasters as `P2`, `P3`, `P5` or `P6`.
//!
//! # Usage
//!
//! ```
//! use netpbm_io::{Encoding, read_pnm_mem, write_pnm_mem};
//!
//! let raster = read_pnm_mem(b"P6\n1 1\n255\n\x10\x20\x30").unwrap();
//! let bytes = write_pnm_mem(&raster, Encoding::AsciiColor).unwrap();
//! assert_eq!(bytes, b"P3\n1 1\n255\n16 32 48 ");
//! ```

mod error;
pub mod header;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use header::{PnmHeader, read_header, write_header};
pub use netpbm_core::Encoding;
pub use pnm::{read_pnm, write_pnm};

use netpbm_core::Raster;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Decode a raster from a byte source.
pub fn decode<R: std::io::BufRead>(source: R) -> IoResult<Raster> {
    read_pnm(source)
}

/// Encode a raster into a new byte buffer.
pub fn encode(raster: &Raster, encoding: Encoding) -> IoResult<Vec<u8>> {
    write_pnm_mem(raster, encoding)
}

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path.as_ref())?;
    read_pnm(BufReader::new(file))
}

/// Read an image from an in-memory buffer.
pub fn read_pnm_mem(data: &[u8]) -> IoResult<Raster> {
    read_pnm(Cursor::new(data))
}

/// Write an image to a file path, creating or truncating it.
///
/// The container is encoded in memory first, so an encode failure leaves
/// no file behind.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P, encoding: Encoding) -> IoResult<()> {
    let data = write_pnm_mem(raster, encoding)?;
    std::fs::write(path.as_ref(), data)?;
    Ok(())
}

/// Write an image to an in-memory buffer.
pub fn write_pnm_mem(raster: &Raster, encoding: Encoding) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_pnm(raster, encoding, &mut out)?;
    Ok(out)
}
