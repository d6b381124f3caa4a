//! Error type for the decode -> filter -> encode pipeline

use thiserror::Error;

/// Any failure of a single pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Decode or encode failure
    #[error(transparent)]
    Io(#[from] netpbm_io::IoError),

    /// Filter failure
    #[error(transparent)]
    Filter(#[from] netpbm_filter::FilterError),

    /// Invalid command-line usage
    #[error("usage: {0}")]
    Usage(String),
}

/// Result type for pipeline runs
pub type PipelineResult<T> = Result<T, PipelineError>;
