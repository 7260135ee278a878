use std::collections::{LinkedList, VecDeque};

use super::{encode_elements, prealloc_len};
use crate::{Decode, Encode, LEN_SIZE, Reader, Result, Shape, Sink, Source, Writer};

impl<T> Encode for [T]
where
    T: Encode,
{
    const SHAPE: Shape = Shape::Sequence;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        encode_elements(writer, Self::SHAPE, self.len(), self)
    }
}

impl<T> Encode for Vec<T>
where
    T: Encode,
{
    const SHAPE: Shape = Shape::Sequence;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        self.as_slice().encode(writer)
    }
}

/// Clears, then appends each element as it is decoded. Only a bounded prefix
/// of the wire length is reserved up front.
impl<T> Decode for Vec<T>
where
    T: Decode + Default,
{
    const MIN_SIZE: usize = LEN_SIZE;

    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        let len = reader.read_count(Shape::Sequence, T::MIN_SIZE)?;
        self.clear();
        self.try_reserve_exact(prealloc_len::<T>(len))?;
        for _ in 0..len {
            self.push(reader.take()?);
        }
        Ok(())
    }
}

impl<T> Encode for VecDeque<T>
where
    T: Encode,
{
    const SHAPE: Shape = Shape::Sequence;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        encode_elements(writer, Self::SHAPE, self.len(), self)
    }
}

impl<T> Decode for VecDeque<T>
where
    T: Decode + Default,
{
    const MIN_SIZE: usize = LEN_SIZE;

    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        let len = reader.read_count(Shape::Sequence, T::MIN_SIZE)?;
        self.clear();
        self.try_reserve_exact(prealloc_len::<T>(len))?;
        for _ in 0..len {
            self.push_back(reader.take()?);
        }
        Ok(())
    }
}

impl<T> Encode for LinkedList<T>
where
    T: Encode,
{
    const SHAPE: Shape = Shape::Sequence;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        encode_elements(writer, Self::SHAPE, self.len(), self)
    }
}

impl<T> Decode for LinkedList<T>
where
    T: Decode + Default,
{
    const MIN_SIZE: usize = LEN_SIZE;

    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        let len = reader.read_count(Shape::Sequence, T::MIN_SIZE)?;
        self.clear();
        for _ in 0..len {
            self.push_back(reader.take()?);
        }
        Ok(())
    }
}
