use crate::{Reader, Result, Source};

/// Decode half of a value's traversal.
///
/// Decoding happens in place: containers are cleared or resized to the length
/// found on the wire and then filled element by element. When decoding fails
/// part way, `self` holds whatever had been filled in so far.
pub trait Decode {
    /// Fewest bytes any encoding of this type occupies.
    ///
    /// Bounds length headers against the bytes a source has left; zero marks
    /// types that may encode to nothing.
    const MIN_SIZE: usize;

    fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
    where
        S: Source + ?Sized;
}
