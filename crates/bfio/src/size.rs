use crate::{Encode, Result, SizeProbe, Writer};

/// Exact encoded length of `value`.
///
/// Runs the encode traversal against a [`SizeProbe`], so nothing is allocated
/// and `value` is only read.
pub fn encoded_size<T>(value: &T) -> Result<usize>
where
    T: Encode + ?Sized,
{
    let mut probe = SizeProbe::new();
    Writer::new(&mut probe).write(value)?;
    Ok(probe.len())
}

/// Encoded length of `T::default()`.
///
/// Equals the size of every value of `T` when `T` only contains scalars,
/// fixed arrays and aggregates of those, which makes it the record size of
/// fixed-layout formats.
pub fn fixed_size<T>() -> Result<usize>
where
    T: Encode + Default,
{
    encoded_size(&T::default())
}
