use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use super::prealloc_len;
use crate::{Decode, Encode, LEN_SIZE, Reader, Result, Shape, Sink, Source, Writer};

/// Entry count, then key and value of every entry in iteration order.
#[inline]
fn encode_entries<'a, S, K, V, I>(writer: &mut Writer<'_, S>, len: usize, entries: I) -> Result<()>
where
    S: Sink + ?Sized,
    K: Encode + 'a,
    V: Encode + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    writer.write_len(Shape::Mapping, len)?;
    for (key, value) in entries {
        key.encode(writer)?;
        value.encode(writer)?;
    }
    Ok(())
}

/// Fewest bytes one encoded entry occupies.
#[inline]
const fn entry_min_size<K: Decode, V: Decode>() -> usize {
    K::MIN_SIZE.saturating_add(V::MIN_SIZE)
}

/// Decodes each entry into fresh scratch slots and hands it to `insert`.
///
/// Entries already present are kept unless a decoded key replaces them.
#[inline]
fn decode_entries<S, K, V>(
    reader: &mut Reader<'_, S>,
    len: usize,
    mut insert: impl FnMut(K, V),
) -> Result<()>
where
    S: Source + ?Sized,
    K: Decode + Default,
    V: Decode + Default,
{
    for _ in 0..len {
        let key = reader.take()?;
        let value = reader.take()?;
        insert(key, value);
    }
    Ok(())
}

impl<K, V> Encode for BTreeMap<K, V>
where
    K: Encode,
    V: Encode,
{
    const SHAPE: Shape = Shape::Mapping;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        encode_entries(writer, self.len(), self)
    }
}

impl<K, V> Decode for BTreeMap<K, V>
where
    K: Decode + Default + Ord,
    V: Decode + Default,
{
    const MIN_SIZE: usize = LEN_SIZE;

    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        let len = reader.read_count(Shape::Mapping, entry_min_size::<K, V>())?;
        decode_entries(reader, len, |key, value| {
            self.insert(key, value);
        })
    }
}

impl<K, V, H> Encode for HashMap<K, V, H>
where
    K: Encode,
    V: Encode,
{
    const SHAPE: Shape = Shape::Mapping;

    #[inline]
    fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        encode_entries(writer, self.len(), self)
    }
}

impl<K, V, H> Decode for HashMap<K, V, H>
where
    K: Decode + Default + Eq + Hash,
    V: Decode + Default,
    H: BuildHasher,
{
    const MIN_SIZE: usize = LEN_SIZE;

    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized,
    {
        let len = reader.read_count(Shape::Mapping, entry_min_size::<K, V>())?;
        self.try_reserve(prealloc_len::<(K, V)>(len))?;
        decode_entries(reader, len, |key, value| {
            self.insert(key, value);
        })
    }
}
