mod direction;
mod limits;
mod reader;
mod writer;

pub use direction::*;
pub use limits::*;
pub use reader::*;
pub use writer::*;
