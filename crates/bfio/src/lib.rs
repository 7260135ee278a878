#![doc = include_str!("../README.md")]

pub use bfio_stream::{
    BufferOptions, DynamicBuffer, Error as StreamError, FileStream, FixedBuffer,
    INITIAL_RESERVED, Seekable, SizeProbe, SliceReader, Sink, Source, Stream,
};

#[cfg(feature = "derive")]
pub use bfio_derive::Serialize;

mod access;
mod aggregate;
mod entry;
mod error;
mod impls;
mod shape;
mod size;
mod traits;

pub use access::*;
pub use entry::*;
pub use error::*;
pub use shape::*;
pub use size::*;
pub use traits::*;

/// Width of a length header on the wire: one native `usize`.
pub const LEN_SIZE: usize = size_of::<usize>();
