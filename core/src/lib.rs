pub mod error;
pub mod model;
pub mod mvu;
pub mod score;
pub mod storage;
pub mod view;

/// Local storage key holding the persisted snapshot.
pub const STORAGE_KEY: &str = "miniGolfScoreData";

/// Name written into every row by "reset everything" and used for fresh boards.
pub const DEFAULT_PLACEHOLDER_NAME: &str = "이름 입력";

pub const DEFAULT_PLAYER_COUNT: usize = 6;
pub const DEFAULT_HOLE_COUNT: usize = 17;
