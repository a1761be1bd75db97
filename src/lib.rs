pub mod cli;
pub mod clock;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
