pub mod order;
pub mod progress;
pub mod stats;
pub mod store;
pub mod timer;
