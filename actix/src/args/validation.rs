use std::{fs, path::PathBuf};

use minigolf_core::model::Snapshot;
use minigolf_core::score::{check_hole_count, check_player_count};

fn parse_count(value: &str, what: &str) -> Result<usize, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{what} must be a whole number, got '{value}'"))
}

/// # Errors
///
/// Will return `Err` if the value is not a player count in range
pub fn check_players(value: &str) -> Result<usize, String> {
    check_player_count(parse_count(value, "players")?).map_err(|e| e.to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not a hole count in range
pub fn check_holes(value: &str) -> Result<usize, String> {
    check_hole_count(parse_count(value, "holes")?).map_err(|e| e.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a scoreboard snapshot
pub fn check_readable_file_and_json(file: &str) -> Result<Snapshot, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    Snapshot::from_json(&contents)
        .map_err(|e| format!("The json file '{file}' is not in the correct format: {e}"))
}
