pub mod day_sign;
pub mod kin;
pub mod macros;

pub use day_sign::*;
pub use kin::*;
