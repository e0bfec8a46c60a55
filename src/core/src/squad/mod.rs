pub mod position;
pub mod squad;

pub use position::*;
pub use squad::*;
