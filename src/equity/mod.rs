pub mod assignment;
pub use assignment::*;

pub mod outcome;
pub use outcome::*;

pub mod simulation;
pub use simulation::*;
