use crate::{Decode, Encode, Reader, Result, Sink, Source, Writer};

/// `stream.put(&value)`: encodes straight into any sink.
pub trait SinkExt: Sink {
    #[inline]
    fn put<T>(&mut self, value: &T) -> Result<()>
    where
        T: Encode + ?Sized,
    {
        Writer::new(self).write(value)
    }
}

impl<S> SinkExt for S where S: Sink + ?Sized {}

/// `stream.get()`: decodes straight out of any source.
pub trait SourceExt: Source {
    #[inline]
    fn get<T>(&mut self) -> Result<T>
    where
        T: Decode + Default,
    {
        Reader::new(self).take()
    }

    #[inline]
    fn get_into<T>(&mut self, value: &mut T) -> Result<()>
    where
        T: Decode + ?Sized,
    {
        Reader::new(self).read(value)
    }
}

impl<S> SourceExt for S where S: Source + ?Sized {}
