pub mod board;
pub use board::*;

pub mod notation;
pub use notation::*;

pub mod range;
pub use range::*;
