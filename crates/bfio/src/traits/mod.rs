mod decode;
mod encode;
mod ext;
mod serialize;

pub use decode::*;
pub use encode::*;
pub use ext::*;
pub use serialize::*;
