//! I/O error types
//!
//! Provides a unified error type for decoding and encoding netpbm
//! containers. Every failure is fatal to the requested operation: no
//! partial raster is returned and no retry is attempted.

use thiserror::Error;

/// Error type for netpbm decode/encode operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Signature unrecognized, or a width/height/max-value token missing
    /// or non-numeric
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The source ended before every declared sample was read
    #[error("truncated pixel data: expected {expected} samples, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// A pixel token is present but not an integer
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The raster cannot be written with the requested encoding
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (allocation, dimensions)
    #[error("core error: {0}")]
    Core(#[from] netpbm_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
