pub mod health;
pub mod trends;

pub use health::*;
pub use trends::*;
