use std::{
    fs::File,
    io::{Read, Seek, SeekFrom, Write},
};

use log::debug;

use crate::{Result, Sink, Source};

/// Stream adapter over an already-open file handle.
///
/// Every transfer is all-or-nothing from the caller's point of view: a short
/// underlying read or write surfaces as [`Error::IO`](crate::Error::IO), with
/// the handle's position left wherever the OS put it.
#[derive(Debug)]
pub struct FileStream<F = File> {
    inner: F,
}

impl<F> FileStream<F> {
    pub fn new(inner: F) -> Self {
        debug!("File stream opened over {}", std::any::type_name::<F>());
        Self { inner }
    }

    #[inline]
    pub fn get_ref(&self) -> &F {
        &self.inner
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut F {
        &mut self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: Seek> FileStream<F> {
    /// Moves the underlying handle, returning the new absolute position.
    pub fn seek_to(&mut self, position: SeekFrom) -> Result<u64> {
        Ok(self.inner.seek(position)?)
    }

    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }
}

impl<F: Write> FileStream<F> {
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.inner.flush()?)
    }
}

impl<F: Write> Sink for FileStream<F> {
    #[inline]
    fn write(&mut self, src: &[u8]) -> Result<()> {
        Ok(self.inner.write_all(src)?)
    }
}

impl<F: Read> Source for FileStream<F> {
    #[inline]
    fn read(&mut self, dst: &mut [u8]) -> Result<()> {
        Ok(self.inner.read_exact(dst)?)
    }
}

impl From<File> for FileStream {
    fn from(file: File) -> Self {
        Self::new(file)
    }
}
