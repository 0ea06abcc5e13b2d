pub mod args;
pub mod controller;

pub use minigolf_core::view::index::DEFAULT_INDEX_TITLE;
