use crate::{Error, Result, Sink};

/// Write-only sink that keeps a running byte count and stores nothing.
///
/// Running an encode against it yields the exact encoded length of a value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SizeProbe {
    len: usize,
}

impl SizeProbe {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes written so far.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Sink for SizeProbe {
    #[inline]
    fn write(&mut self, src: &[u8]) -> Result<()> {
        self.len = self
            .len
            .checked_add(src.len())
            .ok_or(Error::CapacityOverflow {
                requested: src.len(),
            })?;
        Ok(())
    }
}
