pub mod score;
pub mod snapshot;
pub mod types;

pub use score::*;
pub use snapshot::*;
pub use types::*;
