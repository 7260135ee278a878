/// Declares the field list of one or more aggregate types.
///
/// Generates matching [`Encode`](crate::Encode) and [`Decode`](crate::Decode)
/// impls from a single list, so both directions visit the fields in the same
/// order. Each entry names a field, named (`a`) or positional (`0`), and its
/// type.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct DataDescriptor {
///     crc32: i32,
///     compressed_size: i32,
///     uncompressed_size: i32,
/// }
///
/// bfio::aggregate! {
///     DataDescriptor { crc32: i32, compressed_size: i32, uncompressed_size: i32 }
/// }
///
/// let descriptor = DataDescriptor { crc32: 7, compressed_size: 10, uncompressed_size: 20 };
/// let bytes = bfio::to_vec(&descriptor).unwrap();
/// assert_eq!(bytes.len(), 12);
/// assert_eq!(bfio::from_bytes::<DataDescriptor>(&bytes).unwrap(), descriptor);
/// ```
///
/// Generic types need a hand-written impl or `#[derive(Serialize)]`.
#[macro_export]
macro_rules! aggregate {
    ($($ty:ty { $($field:tt : $fty:ty),* $(,)? })+) => {
        $(
            impl $crate::Encode for $ty {
                const SHAPE: $crate::Shape = $crate::Shape::Aggregate;

                #[allow(unused_variables)]
                fn encode<S>(&self, writer: &mut $crate::Writer<'_, S>) -> $crate::Result<()>
                where
                    S: $crate::Sink + ?Sized,
                {
                    $(<$fty as $crate::Encode>::encode(&self.$field, writer)?;)*
                    ::core::result::Result::Ok(())
                }
            }

            impl $crate::Decode for $ty {
                const MIN_SIZE: usize = 0usize $(.saturating_add(<$fty as $crate::Decode>::MIN_SIZE))*;

                #[allow(unused_variables)]
                fn decode<S>(&mut self, reader: &mut $crate::Reader<'_, S>) -> $crate::Result<()>
                where
                    S: $crate::Source + ?Sized,
                {
                    $(<$fty as $crate::Decode>::decode(&mut self.$field, reader)?;)*
                    ::core::result::Result::Ok(())
                }
            }
        )+
    };
}
