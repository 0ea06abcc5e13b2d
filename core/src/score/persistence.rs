use log::{error, info};

use crate::STORAGE_KEY;
use crate::error::CoreError;
use crate::model::{Scoreboard, Snapshot};
use crate::storage::KeyValueStore;

/// Writes the whole board under [`STORAGE_KEY`], replacing any earlier value.
///
/// # Errors
/// Returns an error if serialization or the store write fails.
pub fn save(board: &Scoreboard, store: &mut dyn KeyValueStore) -> Result<(), CoreError> {
    let json = Snapshot::from(board).to_json()?;
    store.set_item(STORAGE_KEY, &json)?;
    Ok(())
}

/// The raw stored value. A store that cannot be read is logged and treated
/// as empty so startup still paints totals and syncs rows.
pub fn read_stored(store: &dyn KeyValueStore) -> Option<String> {
    match store.get_item(STORAGE_KEY) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to read local storage: {e}");
            None
        }
    }
}

/// Overwrites names and cell text by position. Snapshot entries past the end
/// of the board, and holes past the end of a row, are ignored; rows and holes
/// the snapshot does not mention keep their text. Returns the number of rows
/// written.
pub fn apply_snapshot(board: &mut Scoreboard, snapshot: &Snapshot) -> usize {
    let mut applied = 0;
    for (row, saved) in board.players.iter_mut().zip(&snapshot.players) {
        row.name.clone_from(&saved.name);
        for (hole, pair) in row.scores.iter_mut().zip(&saved.scores) {
            hole.plus.clone_from(&pair.plus);
            hole.minus.clone_from(&pair.minus);
        }
        applied += 1;
    }
    applied
}

/// Outcome of a startup load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet; the rendered values stay.
    Empty,
    Restored { rows: usize },
    /// The stored value was unreadable; the board was not touched.
    Skipped,
}

/// Restores `json` (the raw stored value) into `board`. A malformed value is
/// logged and leaves the board exactly as it was.
pub fn load_from_json(board: &mut Scoreboard, json: Option<&str>) -> LoadOutcome {
    let Some(json) = json.filter(|j| !j.is_empty()) else {
        return LoadOutcome::Empty;
    };
    match Snapshot::from_json(json) {
        Ok(snapshot) => {
            let rows = apply_snapshot(board, &snapshot);
            info!("Data loaded from local storage ({rows} rows)");
            LoadOutcome::Restored { rows }
        }
        Err(e) => {
            error!("Failed to load data from local storage: {e}");
            LoadOutcome::Skipped
        }
    }
}
