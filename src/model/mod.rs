pub mod config;
pub mod fixtures;
pub mod task;

pub use config::*;
pub use fixtures::*;
pub use task::*;
