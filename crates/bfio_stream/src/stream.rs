use crate::Result;

/// Write half of a byte stream.
///
/// On `Ok`, exactly `src.len()` bytes were accepted in order. What an `Err`
/// leaves behind (partial copy, moved cursor) is defined by each implementation.
pub trait Sink {
    fn write(&mut self, src: &[u8]) -> Result<()>;
}

/// Read half of a byte stream.
///
/// On `Ok`, `dst` was filled completely. On `Err`, only the prefix documented
/// by the implementation holds data; the rest of `dst` is unspecified.
pub trait Source {
    fn read(&mut self, dst: &mut [u8]) -> Result<()>;

    /// Bytes known to be left, when the source can tell without reading.
    #[inline]
    fn remaining_hint(&self) -> Option<usize> {
        None
    }
}

/// Stream that can be both written to and read from.
pub trait Stream: Sink + Source {}

impl<T> Stream for T where T: Sink + Source + ?Sized {}

/// Cursor control for in-memory streams.
///
/// Seeking is never validated; a position past the end only surfaces on the
/// next read (short read) or write (growth or truncation).
pub trait Seekable {
    fn seek(&mut self, position: usize);

    fn tell(&self) -> usize;

    #[inline]
    fn rewind(&mut self) {
        self.seek(0);
    }
}

impl<S> Sink for &mut S
where
    S: Sink + ?Sized,
{
    #[inline]
    fn write(&mut self, src: &[u8]) -> Result<()> {
        (**self).write(src)
    }
}

impl<S> Source for &mut S
where
    S: Source + ?Sized,
{
    #[inline]
    fn read(&mut self, dst: &mut [u8]) -> Result<()> {
        (**self).read(dst)
    }

    #[inline]
    fn remaining_hint(&self) -> Option<usize> {
        (**self).remaining_hint()
    }
}

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    #[inline]
    fn write(&mut self, src: &[u8]) -> Result<()> {
        (**self).write(src)
    }
}

impl<S> Source for Box<S>
where
    S: Source + ?Sized,
{
    #[inline]
    fn read(&mut self, dst: &mut [u8]) -> Result<()> {
        (**self).read(dst)
    }

    #[inline]
    fn remaining_hint(&self) -> Option<usize> {
        (**self).remaining_hint()
    }
}
