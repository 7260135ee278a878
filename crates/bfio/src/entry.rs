use crate::{
    BufferOptions, Decode, DynamicBuffer, Encode, Error, Reader, Result, Sink, SliceReader,
    Source, Writer, encoded_size,
};

/// Encodes `value` into `sink`.
#[inline]
pub fn encode<S, T>(sink: &mut S, value: &T) -> Result<()>
where
    S: Sink + ?Sized,
    T: Encode + ?Sized,
{
    Writer::new(sink).write(value)
}

/// Decodes a fresh `T` from `source`.
#[inline]
pub fn decode<S, T>(source: &mut S) -> Result<T>
where
    S: Source + ?Sized,
    T: Decode + Default,
{
    Reader::new(source).take()
}

/// Decodes from `source` into an existing value.
#[inline]
pub fn decode_into<S, T>(source: &mut S, value: &mut T) -> Result<()>
where
    S: Source + ?Sized,
    T: Decode + ?Sized,
{
    Reader::new(source).read(value)
}

/// Encodes `value` into a new byte vector.
///
/// The buffer is sized with [`encoded_size`] first, so it is allocated once.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Encode + ?Sized,
{
    let size = encoded_size(value)?;
    let mut buffer = DynamicBuffer::with_options(BufferOptions::new(size))?;
    encode(&mut buffer, value)?;
    Ok(buffer.into_vec())
}

/// Decodes a `T` that must span all of `bytes`.
pub fn from_bytes<T>(bytes: &[u8]) -> Result<T>
where
    T: Decode + Default,
{
    let mut reader = SliceReader::new(bytes);
    let value = decode(&mut reader)?;
    match reader.remaining() {
        0 => Ok(value),
        remaining => Err(Error::TrailingBytes { remaining }),
    }
}
