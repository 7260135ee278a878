use crate::{Decode, Encode, Error, Reader, Result, Shape, Sink, Source, Writer};

// Scalars travel as their native in-memory bytes: no tag, no byte swapping.
macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Encode for $t {
                const SHAPE: Shape = Shape::Scalar;

                #[inline]
                fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
                where
                    S: Sink + ?Sized,
                {
                    writer.write_bytes(&self.to_ne_bytes())
                }
            }

            impl Decode for $t {
                const MIN_SIZE: usize = size_of::<$t>();

                #[inline]
                fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
                where
                    S: Source + ?Sized,
                {
                    *self = <$t>::from_ne_bytes(reader.read_array()?);
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

impl Encode for bool {
    const SHAPE: Shape = Shape::Scalar;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        writer.write_bytes(&[u8::from(*self)])
    }
}

impl Decode for bool {
    const MIN_SIZE: usize = 1;

    #[inline]
    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        *self = match reader.read_array::<1>()?[0] {
            0 => false,
            1 => true,
            byte => return Err(Error::InvalidBool(byte)),
        };
        Ok(())
    }
}

/// A `char` is its `u32` code point.
impl Encode for char {
    const SHAPE: Shape = Shape::Scalar;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        writer.write_bytes(&u32::from(*self).to_ne_bytes())
    }
}

impl Decode for char {
    const MIN_SIZE: usize = 4;

    #[inline]
    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        let code = u32::from_ne_bytes(reader.read_array()?);
        *self = char::from_u32(code).ok_or(Error::InvalidChar(code))?;
        Ok(())
    }
}
