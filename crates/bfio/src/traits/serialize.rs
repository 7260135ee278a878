use crate::{Decode, Encode};

/// Types that can travel in both directions.
pub trait Serialize: Encode + Decode {}

impl<T> Serialize for T where T: Encode + Decode + ?Sized {}
