/// Which way a traversal moves bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encode,
    Decode,
}

/// State shared by both traversal directions.
///
/// [`Writer`](crate::Writer) and [`Reader`](crate::Reader) are the two
/// implementations; the direction is fixed by the type, so every leaf call is
/// resolved at compile time.
pub trait Accessor {
    const DIRECTION: Direction;

    /// Bytes moved through the stream by this accessor so far.
    fn transferred(&self) -> usize;
}
