use crate::error::CoreError;
use std::collections::HashMap;
use std::hash::BuildHasher;

pub const MAX_PLAYERS: usize = 12;
pub const MAX_HOLES: usize = 36;

/// Board dimensions and placeholder for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRequest {
    pub players: usize,
    pub holes: usize,
    pub placeholder: String,
}

/// Checks a player count against `1..=MAX_PLAYERS`.
///
/// # Errors
/// Returns `CoreError::Request` with a human-readable message when out of range.
pub fn check_player_count(players: usize) -> Result<usize, CoreError> {
    if (1..=MAX_PLAYERS).contains(&players) {
        Ok(players)
    } else {
        Err(CoreError::Request(format!(
            "players must be between 1 and {MAX_PLAYERS}"
        )))
    }
}

/// Checks a hole count against `1..=MAX_HOLES`.
///
/// # Errors
/// Returns `CoreError::Request` with a human-readable message when out of range.
pub fn check_hole_count(holes: usize) -> Result<usize, CoreError> {
    if (1..=MAX_HOLES).contains(&holes) {
        Ok(holes)
    } else {
        Err(CoreError::Request(format!(
            "holes must be between 1 and {MAX_HOLES}"
        )))
    }
}

fn parse_count<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    key: &str,
    default: usize,
) -> Result<usize, CoreError> {
    match query.get(key).map(|s| s.trim()) {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| CoreError::Request(format!("{key} parameter must be a whole number"))),
    }
}

/// Parse query parameters into a board request, falling back to `defaults`.
///
/// # Errors
/// Returns an error if `players` or `holes` is present but not a number in range.
pub fn parse_board_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    defaults: &BoardRequest,
) -> Result<BoardRequest, CoreError> {
    let players = check_player_count(parse_count(query, "players", defaults.players)?)?;
    let holes = check_hole_count(parse_count(query, "holes", defaults.holes)?)?;
    Ok(BoardRequest {
        players,
        holes,
        placeholder: defaults.placeholder.clone(),
    })
}
