use log::trace;

use crate::{Accessor, Decode, Direction, Error, LEN_SIZE, Limits, Result, Shape, Source};

/// Decode-direction accessor.
///
/// Borrows a source for the duration of a traversal and fills every leaf
/// through [`Source::read`]. Length headers are checked against [`Limits`]
/// before the caller gets to resize anything.
#[derive(Debug)]
pub struct Reader<'s, S>
where
    S: Source + ?Sized,
{
    source: &'s mut S,
    read: usize,
    limits: Limits,
}

impl<'s, S> Reader<'s, S>
where
    S: Source + ?Sized,
{
    #[inline]
    pub fn new(source: &'s mut S) -> Self {
        Self::with_limits(source, Limits::UNLIMITED)
    }

    #[inline]
    pub fn with_limits(source: &'s mut S, limits: Limits) -> Self {
        Self {
            source,
            read: 0,
            limits,
        }
    }

    /// Leaf read: fills `dst` from the source.
    #[inline]
    pub fn read_bytes(&mut self, dst: &mut [u8]) -> Result<()> {
        self.source.read(dst)?;
        self.read += dst.len();
        Ok(())
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0; N];
        self.read_bytes(&mut bytes)?;
        Ok(bytes)
    }

    /// Reads a native `usize` length header and checks it against the limits.
    #[inline]
    pub fn read_len(&mut self, shape: Shape) -> Result<usize> {
        let len = usize::from_ne_bytes(self.read_array::<LEN_SIZE>()?);
        trace!("{shape:?} header in: {len}");
        self.limits.check_len(len)?;
        Ok(len)
    }

    /// Reads an element count whose elements occupy at least `min_size` bytes each.
    ///
    /// When the source knows how much is left, a count those bytes cannot
    /// hold fails as a short read before anything is allocated. Zero-sized
    /// elements are capped by [`Limits::MAX_ZERO_SIZED_LEN`] unless `max_len`
    /// is set.
    pub fn read_count(&mut self, shape: Shape, min_size: usize) -> Result<usize> {
        let len = self.read_len(shape)?;
        if min_size == 0 {
            if self.limits.max_len.is_none() && len > Limits::MAX_ZERO_SIZED_LEN {
                return Err(Error::LengthLimit {
                    len,
                    limit: Limits::MAX_ZERO_SIZED_LEN,
                });
            }
        } else if let Some(available) = self.source.remaining_hint()
            && len > available / min_size
        {
            return Err(bfio_stream::Error::ShortRead {
                requested: len.saturating_mul(min_size),
                available,
            }
            .into());
        }
        Ok(len)
    }

    /// Decodes in place into `value`.
    #[inline]
    pub fn read<T>(&mut self, value: &mut T) -> Result<()>
    where
        T: Decode + ?Sized,
    {
        value.decode(self)
    }

    /// Decodes into a fresh `T::default()`.
    #[inline]
    pub fn take<T>(&mut self) -> Result<T>
    where
        T: Decode + Default,
    {
        let mut value = T::default();
        value.decode(self)?;
        Ok(value)
    }

    #[inline]
    pub fn bytes_read(&self) -> usize {
        self.read
    }

    #[inline]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    #[inline]
    pub fn source(&mut self) -> &mut S {
        &mut *self.source
    }
}

impl<S> Accessor for Reader<'_, S>
where
    S: Source + ?Sized,
{
    const DIRECTION: Direction = Direction::Decode;

    #[inline]
    fn transferred(&self) -> usize {
        self.read
    }
}
