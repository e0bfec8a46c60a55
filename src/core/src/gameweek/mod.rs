pub mod chips;
pub mod facts;
pub mod gameweek;

pub use chips::*;
pub use facts::*;
pub use gameweek::*;
