//! Error types for grapherlib

use thiserror::Error;

/// Errors that can occur while sampling, formatting, or rendering tables
#[derive(Error, Debug)]
pub enum GrapherError {
    /// Sampling step would not terminate the range walk
    #[error("invalid sampling step {step}: step must be a positive number")]
    InvalidRange { step: f64 },

    /// Cell length is too small to format a value into
    #[error("cannot format value into a cell of length {length}: {reason}")]
    FormatError { length: usize, reason: String },

    /// Positional access outside the store
    #[error("table index {index} out of range (store holds {len} tables)")]
    IndexOutOfRange { index: usize, len: usize },

    /// IO error while writing to the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
