use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::model::types::{HoleScore, PlayerRow, Scoreboard};

/// The persisted record: `{"players":[{"name":..,"scores":[{"plus":..,"minus":..}]}]}`.
///
/// Rows are positional; a snapshot carries no row ids and no totals.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub players: Vec<PlayerSnapshot>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerSnapshot {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default)]
    pub scores: Vec<ScorePair>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScorePair {
    #[serde(deserialize_with = "lenient_text")]
    pub plus: String,
    #[serde(deserialize_with = "lenient_text")]
    pub minus: String,
}

impl From<&HoleScore> for ScorePair {
    fn from(hole: &HoleScore) -> Self {
        Self {
            plus: hole.plus.trim().to_string(),
            minus: hole.minus.trim().to_string(),
        }
    }
}

impl From<&PlayerRow> for PlayerSnapshot {
    fn from(row: &PlayerRow) -> Self {
        Self {
            name: row.name.trim().to_string(),
            scores: row.scores.iter().map(ScorePair::from).collect(),
        }
    }
}

impl From<&Scoreboard> for Snapshot {
    fn from(board: &Scoreboard) -> Self {
        Self {
            players: board.players.iter().map(PlayerSnapshot::from).collect(),
        }
    }
}

impl Snapshot {
    /// # Errors
    /// Returns `CoreError::Parse` when `json` is not a snapshot document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns `CoreError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Accepts what a text cell could have been written from: strings as-is,
/// numbers and booleans by their display form, `null` as empty text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected text, found {other}"
        ))),
    }
}
