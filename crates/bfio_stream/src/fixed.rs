use log::trace;

use crate::{Error, Result, Seekable, Sink, Source};

/// Bounded stream over caller-owned memory.
///
/// The logical size is the slice length and never changes. Writing or reading
/// past the end transfers the bytes that fit, pins the cursor at the end and
/// fails.
#[derive(Debug)]
pub struct FixedBuffer<'a> {
    data: &'a mut [u8],
    offset: usize,
}

impl<'a> FixedBuffer<'a> {
    #[inline]
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, offset: 0 }
    }

    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &*self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    pub fn into_inner(self) -> &'a mut [u8] {
        self.data
    }
}

impl Seekable for FixedBuffer<'_> {
    #[inline]
    fn seek(&mut self, position: usize) {
        self.offset = position;
    }

    #[inline]
    fn tell(&self) -> usize {
        self.offset
    }
}

impl Sink for FixedBuffer<'_> {
    fn write(&mut self, src: &[u8]) -> Result<()> {
        let available = self.remaining();
        let size = self.data.len();
        if src.len() > available {
            self.data[size - available..].copy_from_slice(&src[..available]);
            self.offset = size;
            trace!("Fixed buffer full: dropped {} of {} bytes", src.len() - available, src.len());
            return Err(Error::ShortWrite {
                requested: src.len(),
                written: available,
            });
        }
        let end = self.offset + src.len();
        self.data[self.offset..end].copy_from_slice(src);
        self.offset = end;
        Ok(())
    }
}

impl Source for FixedBuffer<'_> {
    fn read(&mut self, dst: &mut [u8]) -> Result<()> {
        read_bounded(&*self.data, &mut self.offset, dst)
    }

    #[inline]
    fn remaining_hint(&self) -> Option<usize> {
        Some(self.remaining())
    }
}

/// Read-only bounded stream over borrowed bytes.
#[derive(Debug, Clone, Copy)]
pub struct SliceReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> SliceReader<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Bytes from the cursor to the end.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.data.len() - self.remaining()..]
    }
}

impl Seekable for SliceReader<'_> {
    #[inline]
    fn seek(&mut self, position: usize) {
        self.offset = position;
    }

    #[inline]
    fn tell(&self) -> usize {
        self.offset
    }
}

impl Source for SliceReader<'_> {
    fn read(&mut self, dst: &mut [u8]) -> Result<()> {
        read_bounded(self.data, &mut self.offset, dst)
    }

    #[inline]
    fn remaining_hint(&self) -> Option<usize> {
        Some(self.remaining())
    }
}

/// Shared short-read rule of the bounded views.
#[inline]
fn read_bounded(data: &[u8], offset: &mut usize, dst: &mut [u8]) -> Result<()> {
    let size = data.len();
    let available = size.saturating_sub(*offset);
    if dst.len() > available {
        dst[..available].copy_from_slice(&data[size - available..]);
        *offset = size;
        return Err(Error::ShortRead {
            requested: dst.len(),
            available,
        });
    }
    let end = *offset + dst.len();
    dst.copy_from_slice(&data[*offset..end]);
    *offset = end;
    Ok(())
}
