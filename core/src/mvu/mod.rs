pub mod runtime;
pub mod scoreboard;

pub use runtime::run_scoreboard;
pub use scoreboard::*;
