use crate::{Error, Result};

/// Decode-side bounds applied to length headers before any container is
/// resized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest element count accepted in a single length header.
    pub max_len: Option<usize>,
}

impl Limits {
    pub const UNLIMITED: Self = Self { max_len: None };

    /// Element count accepted for zero-sized elements when `max_len` is unset.
    pub const MAX_ZERO_SIZED_LEN: usize = 1 << 16;

    pub fn new(max_len: Option<usize>) -> Self {
        Self { max_len }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    #[inline]
    pub fn check_len(&self, len: usize) -> Result<()> {
        match self.max_len {
            Some(limit) if len > limit => Err(Error::LengthLimit { len, limit }),
            _ => Ok(()),
        }
    }
}
