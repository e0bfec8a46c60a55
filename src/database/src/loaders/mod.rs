pub mod season;

pub use season::*;
