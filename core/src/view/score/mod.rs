pub mod modal;
pub mod scoreboard;
pub mod utils;

pub use modal::*;
pub use scoreboard::*;
pub use utils::*;
