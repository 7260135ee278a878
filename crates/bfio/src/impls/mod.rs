mod array;
mod map;
mod scalar;
mod sequence;
mod set;
mod text;
mod tuple;

use crate::{Encode, Result, Shape, Sink, Writer};

/// Largest up-front reservation made for a decoded container, in bytes.
const PREALLOC_BYTES: usize = 64 * 1024;

/// Elements to reserve before decoding `len` of them; the rest is grown as
/// elements actually arrive.
#[inline]
pub(crate) fn prealloc_len<T>(len: usize) -> usize {
    len.min(PREALLOC_BYTES / size_of::<T>().max(1))
}

/// Length header followed by each element in iteration order.
///
/// Shared by every runtime-sized shape except mappings.
#[inline]
pub(crate) fn encode_elements<'a, S, T, I>(
    writer: &mut Writer<'_, S>,
    shape: Shape,
    len: usize,
    elements: I,
) -> Result<()>
where
    S: Sink + ?Sized,
    T: Encode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    writer.write_len(shape, len)?;
    for element in elements {
        element.encode(writer)?;
    }
    Ok(())
}
