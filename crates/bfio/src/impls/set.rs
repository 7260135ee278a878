use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use super::{encode_elements, prealloc_len};
use crate::{Decode, Encode, LEN_SIZE, Reader, Result, Shape, Sink, Source, Writer};

impl<T> Encode for BTreeSet<T>
where
    T: Encode,
{
    const SHAPE: Shape = Shape::Set;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        encode_elements(writer, Self::SHAPE, self.len(), self)
    }
}

impl<T> Decode for BTreeSet<T>
where
    T: Decode + Default + Ord,
{
    const MIN_SIZE: usize = LEN_SIZE;

    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        let len = reader.read_count(Shape::Set, T::MIN_SIZE)?;
        self.clear();
        for _ in 0..len {
            self.insert(reader.take()?);
        }
        Ok(())
    }
}

impl<T, H> Encode for HashSet<T, H>
where
    T: Encode,
{
    const SHAPE: Shape = Shape::Set;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        encode_elements(writer, Self::SHAPE, self.len(), self)
    }
}

impl<T, H> Decode for HashSet<T, H>
where
    T: Decode + Default + Eq + Hash,
    H: BuildHasher,
{
    const MIN_SIZE: usize = LEN_SIZE;

    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        let len = reader.read_count(Shape::Set, T::MIN_SIZE)?;
        self.clear();
        self.try_reserve(prealloc_len::<T>(len))?;
        for _ in 0..len {
            self.insert(reader.take()?);
        }
        Ok(())
    }
}
