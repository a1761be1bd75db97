pub mod duration;
pub mod label;

pub use duration::*;
pub use label::*;
