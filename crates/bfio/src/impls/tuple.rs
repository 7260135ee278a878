use crate::{Decode, Encode, Reader, Result, Shape, Sink, Source, Writer};

// Components in order, no header. Pairs keep their own shape; other arities
// are plain aggregates.
macro_rules! impl_tuple {
    ($shape:ident => $($name:ident . $idx:tt),+) => {
        impl<$($name),+> Encode for ($($name,)+)
        where
            $($name: Encode,)+
        {
            const SHAPE: Shape = Shape::$shape;

            #[inline]
            fn encode<S>(&self, writer: &mut Writer<'_, S>) -> Result<()>
            where
                S: Sink + ?Sized,
            {
                $(self.$idx.encode(writer)?;)+
                Ok(())
            }
        }

        impl<$($name),+> Decode for ($($name,)+)
        where
            $($name: Decode,)+
        {
            const MIN_SIZE: usize = 0usize $(.saturating_add(<$name as Decode>::MIN_SIZE))+;

            #[inline]
            fn decode<S>(&mut self, reader: &mut Reader<'_, S>) -> Result<()>
            where
                S: Source + ?Sized,
            {
                $(self.$idx.decode(reader)?;)+
                Ok(())
            }
        }
    };
}

impl_tuple!(Aggregate => A.0);
impl_tuple!(Pair => A.0, B.1);
impl_tuple!(Aggregate => A.0, B.1, C.2);
impl_tuple!(Aggregate => A.0, B.1, C.2, D.3);
impl_tuple!(Aggregate => A.0, B.1, C.2, D.3, E.4);
impl_tuple!(Aggregate => A.0, B.1, C.2, D.3, E.4, F.5);
