use log::debug;

use crate::{BufferOptions, Error, Result, Seekable, Sink, Source};

/// Growable in-memory byte stream.
///
/// Tracks three quantities, like a region in a storage file:
/// - `len`: bytes currently considered valid
/// - `offset`: the shared read/write cursor
/// - `reserved`: bytes allocated, always zero or a power of two, `>= len`
///
/// Writes past `len` grow the logical size and, when they also pass `reserved`,
/// reallocate to the next power of two. The allocation never shrinks on its own.
#[derive(Debug, Clone)]
pub struct DynamicBuffer {
    /// Backing allocation; `data.len()` is the reserved size.
    data: Vec<u8>,
    len: usize,
    offset: usize,
}

impl DynamicBuffer {
    /// Creates an empty buffer with the default initial reservation.
    pub fn new() -> Self {
        Self {
            data: vec![0; BufferOptions::default().initial_reserved],
            len: 0,
            offset: 0,
        }
    }

    pub fn with_options(options: BufferOptions) -> Result<Self> {
        let mut data = Vec::new();
        if options.initial_reserved > 0 {
            let reserved = Self::round_reserved(options.initial_reserved)?;
            data.try_reserve_exact(reserved)?;
            data.resize(reserved, 0);
        }
        Ok(Self {
            data,
            len: 0,
            offset: 0,
        })
    }

    /// Creates a buffer holding a copy of `bytes`, cursor at the start.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut buffer = Self::with_options(bytes.len().into())?;
        buffer.write(bytes)?;
        buffer.rewind();
        Ok(buffer)
    }

    /// Sets the logical size.
    ///
    /// Growing past the reservation reallocates to the next power of two,
    /// preserving existing bytes. Anything else only moves the logical end,
    /// which also allows shrinking the valid window without touching the
    /// allocation. On failure nothing changes.
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        let reserved = self.reserved();
        if new_len > reserved {
            let new_reserved = Self::round_reserved(new_len)?;
            self.data.try_reserve_exact(new_reserved - reserved)?;
            self.data.resize(new_reserved, 0);
            debug!("Buffer reallocated: reserved {reserved} -> {new_reserved} (len = {new_len})");
        }
        self.len = new_len;
        Ok(())
    }

    #[inline]
    fn round_reserved(len: usize) -> Result<usize> {
        len.checked_next_power_of_two()
            .ok_or(Error::CapacityOverflow { requested: len })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn reserved(&self) -> usize {
        self.data.len()
    }

    /// Bytes left between the cursor and the logical end.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len.saturating_sub(self.offset)
    }

    /// Returns the valid bytes, `0..len`.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }

    /// Empties the buffer and rewinds the cursor, keeping the allocation.
    pub fn clear(&mut self) {
        self.len = 0;
        self.offset = 0;
    }

    /// Consumes the buffer, returning the valid bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.len);
        self.data
    }
}

impl Default for DynamicBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Seekable for DynamicBuffer {
    #[inline]
    fn seek(&mut self, position: usize) {
        self.offset = position;
    }

    #[inline]
    fn tell(&self) -> usize {
        self.offset
    }
}

impl Sink for DynamicBuffer {
    /// Writes at the cursor, extending the logical size when the write ends
    /// past it. A write that ends inside the valid window overwrites in place.
    /// An empty write with the cursor past the end still extends `len` to it.
    fn write(&mut self, src: &[u8]) -> Result<()> {
        let end = self
            .offset
            .checked_add(src.len())
            .ok_or(Error::CapacityOverflow {
                requested: src.len(),
            })?;
        if end > self.len {
            self.resize(end)?;
        }
        self.data[self.offset..end].copy_from_slice(src);
        self.offset = end;
        Ok(())
    }
}

impl Source for DynamicBuffer {
    /// Short reads copy what is left, move the cursor to `len` and fail.
    fn read(&mut self, dst: &mut [u8]) -> Result<()> {
        let available = self.remaining();
        if dst.len() > available {
            dst[..available].copy_from_slice(&self.data[self.len - available..self.len]);
            self.offset = self.len;
            return Err(Error::ShortRead {
                requested: dst.len(),
                available,
            });
        }
        let end = self.offset + dst.len();
        dst.copy_from_slice(&self.data[self.offset..end]);
        self.offset = end;
        Ok(())
    }

    #[inline]
    fn remaining_hint(&self) -> Option<usize> {
        Some(self.remaining())
    }
}
