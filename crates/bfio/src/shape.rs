/// Value shape classes recognized by the traversal.
///
/// Every [`Encode`](crate::Encode) impl names its shape; only the shapes with a
/// runtime length carry a length header on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    FixedArray,
    Aggregate,
    Pair,
    Sequence,
    Set,
    Mapping,
    Text,
}

impl Shape {
    /// Whether values of this shape start with a length header.
    #[inline]
    pub const fn has_header(self) -> bool {
        matches!(self, Self::Sequence | Self::Set | Self::Mapping | Self::Text)
    }
}
