pub mod result;
pub mod simulator;

pub use result::*;
pub use simulator::*;
