use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("score storage failed: {0}")]
    Storage(#[from] StorageError),
    /// The page no longer matches what the board expects.
    #[error("page update failed: {0}")]
    View(String),
    #[error("unreadable scoreboard json: {0}")]
    Parse(String),
    #[error("bad board request: {0}")]
    Request(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
