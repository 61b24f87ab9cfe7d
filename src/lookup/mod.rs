pub mod disk;
pub use disk::*;

pub mod lookup;
pub use lookup::*;

pub mod table;
pub use table::*;
