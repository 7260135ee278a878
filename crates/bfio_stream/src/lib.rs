#![doc = include_str!("../README.md")]

mod dynamic;
pub mod error;
mod file;
mod fixed;
mod options;
mod probe;
mod stream;

pub use dynamic::*;
pub use error::*;
pub use file::*;
pub use fixed::*;
pub use options::*;
pub use probe::*;
pub use stream::*;

/// Reservation of a fresh [`DynamicBuffer`], in bytes.
pub const INITIAL_RESERVED: usize = 16;
