use std::mem;

use super::prealloc_len;
use crate::{Decode, Encode, LEN_SIZE, Reader, Result, Shape, Sink, Source, Writer};

// Text is a sequence of single-byte characters: a byte-length header, then one
// leaf per byte, never a bulk copy.
impl Encode for str {
    const SHAPE: Shape = Shape::Text;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        writer.write_len(Self::SHAPE, self.len())?;
        for byte in self.as_bytes() {
            byte.encode(writer)?;
        }
        Ok(())
    }
}

impl Encode for String {
    const SHAPE: Shape = Shape::Text;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        self.as_str().encode(writer)
    }
}

/// Reuses the string's allocation. The string is left empty if decoding fails.
impl Decode for String {
    const MIN_SIZE: usize = LEN_SIZE;

    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        let mut bytes = mem::take(self).into_bytes();
        bytes.clear();
        let len = reader.read_count(Shape::Text, u8::MIN_SIZE)?;
        bytes.try_reserve_exact(prealloc_len::<u8>(len))?;
        for _ in 0..len {
            bytes.push(reader.take::<u8>()?);
        }
        *self = String::from_utf8(bytes)?;
        Ok(())
    }
}
