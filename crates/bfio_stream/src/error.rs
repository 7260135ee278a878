use std::{collections::TryReserveError, io, result};

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for stream operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] io::Error),

    // Transfer errors
    #[error("Short read: requested {requested} bytes, only {available} available")]
    ShortRead { requested: usize, available: usize },

    #[error("Short write: requested {requested} bytes, only {written} written")]
    ShortWrite { requested: usize, written: usize },

    // Allocation errors
    #[error("Failed to reserve buffer space: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("Buffer size would overflow: requested={requested}")]
    CapacityOverflow { requested: usize },
}
