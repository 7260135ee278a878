use std::{collections::TryReserveError, result, string::FromUtf8Error};

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for bfio operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Stream(#[from] bfio_stream::Error),
    #[error("Failed to reserve container space: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("Invalid bool byte: {0}")]
    InvalidBool(u8),
    #[error("Invalid char code point: {0:#x}")]
    InvalidChar(u32),
    #[error(transparent)]
    InvalidUtf8(#[from] FromUtf8Error),
    #[error("Length header {len} exceeds the limit of {limit}")]
    LengthLimit { len: usize, limit: usize },
    #[error("{remaining} trailing byte(s) left after decoding")]
    TrailingBytes { remaining: usize },
}

impl Error {
    /// Whether the source ran out of bytes.
    pub fn is_short_read(&self) -> bool {
        matches!(self, Self::Stream(bfio_stream::Error::ShortRead { .. }))
    }

    /// Whether the sink refused bytes.
    pub fn is_short_write(&self) -> bool {
        matches!(self, Self::Stream(bfio_stream::Error::ShortWrite { .. }))
    }
}
