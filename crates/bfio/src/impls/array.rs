use crate::{Decode, Encode, Reader, Result, Shape, Sink, Source, Writer};

// The element count is part of the type, so no header.
impl<T, const N: usize> Encode for [T; N]
where
    T: Encode,
{
    const SHAPE: Shape = Shape::FixedArray;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        for element in self {
            element.encode(writer)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> Decode for [T; N]
where
    T: Decode,
{
    const MIN_SIZE: usize = T::MIN_SIZE.saturating_mul(N);

    #[inline]
    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        for element in self.iter_mut() {
            element.decode(reader)?;
        }
        Ok(())
    }
}
