use crate::{Result, Shape, Sink, Writer};

/// Encode half of a value's traversal.
///
/// Implementations visit the value's parts in a fixed order and must agree
/// with the matching [`Decode`](crate::Decode) impl on that order. The engine
/// has no way to detect a mismatch.
pub trait Encode {
    /// Shape class of the value, which decides whether a length header is written.
    const SHAPE: Shape;

    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized;
}

impl<T> Encode for &T
where
    T: Encode + ?Sized,
{
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        (**self).encode(writer)
    }
}
