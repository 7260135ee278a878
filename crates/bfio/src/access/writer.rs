use log::trace;

use crate::{Accessor, Direction, Encode, Result, Shape, Sink};

/// Encode-direction accessor.
///
/// Borrows a sink for the duration of a traversal and forwards every leaf to
/// [`Sink::write`]. The first failing write aborts the traversal.
#[derive(Debug)]
pub struct Writer<'s, S>
where
    S: Sink + ?Sized,
{
    sink: &'s mut S,
    written: usize,
}

impl<'s, S> Writer<'s, S>
where
    S: Sink + ?Sized,
{
    #[inline]
    pub fn new(sink: &'s mut S) -> Self {
        Self { sink, written: 0 }
    }

    /// Leaf write: hands `bytes` to the sink unchanged.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.sink.write(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    /// Writes a length header as a native `usize`.
    #[inline]
    pub fn write_len(&mut self, shape: Shape, len: usize) -> Result<()> {
        trace!("{shape:?} header out: {len}");
        self.write_bytes(&len.to_ne_bytes())
    }

    #[inline]
    pub fn write<T>(&mut self, value: &T) -> Result<()>
    where
        T: Encode + ?Sized,
    {
        value.encode(self)
    }

    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    #[inline]
    pub fn sink(&mut self) -> &mut S {
        &mut *self.sink
    }
}

impl<S> Accessor for Writer<'_, S>
where
    S: Sink + ?Sized,
{
    const DIRECTION: Direction = Direction::Encode;

    #[inline]
    fn transferred(&self) -> usize {
        self.written
    }
}
