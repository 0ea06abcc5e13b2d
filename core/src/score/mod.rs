pub mod edit;
pub mod layout;
pub mod persistence;
pub mod request;
pub mod reset;

pub use edit::*;
pub use layout::*;
pub use persistence::*;
pub use request::*;
pub use reset::*;
