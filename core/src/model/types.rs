use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::score::total_from_text;

/// Stable row identifier shared by the fixed and scrollable table rows.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PlayerId)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Plus,
    Minus,
}

impl Side {
    /// CSS class of the cell half holding this side.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Side::Plus => "score-plus",
            Side::Minus => "score-minus",
        }
    }
}

/// Address of one editable plus/minus cell.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub player: PlayerId,
    pub hole: usize,
    pub side: Side,
}

impl CellRef {
    #[must_use]
    pub fn new(player: PlayerId, hole: usize, side: Side) -> Self {
        Self { player, hole, side }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleScore {
    pub plus: String,
    pub minus: String,
}

impl HoleScore {
    #[must_use]
    pub fn zero() -> Self {
        Self {
            plus: "0".to_string(),
            minus: "0".to_string(),
        }
    }

    #[must_use]
    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Plus => &self.plus,
            Side::Minus => &self.minus,
        }
    }

    pub fn set_text(&mut self, side: Side, text: impl Into<String>) {
        match side {
            Side::Plus => self.plus = text.into(),
            Side::Minus => self.minus = text.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerRow {
    pub id: PlayerId,
    pub name: String,
    pub scores: Vec<HoleScore>,
}

impl PlayerRow {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, holes: usize) -> Self {
        Self {
            id,
            name: name.into(),
            scores: vec![HoleScore::zero(); holes],
        }
    }

    /// `sum(plus) - sum(minus)` over the current cell text.
    #[must_use]
    pub fn total(&self) -> i64 {
        total_from_text(
            self.scores.iter().map(|h| h.plus.as_str()),
            self.scores.iter().map(|h| h.minus.as_str()),
        )
    }

    pub fn zero_scores(&mut self) {
        for hole in &mut self.scores {
            *hole = HoleScore::zero();
        }
    }
}

/// Ordered collection of player rows; the single source of truth for the board.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub players: Vec<PlayerRow>,
}

impl Scoreboard {
    #[must_use]
    pub fn new(players: Vec<PlayerRow>) -> Self {
        Self { players }
    }

    /// A fresh board: every name set to `placeholder`, every cell `"0"`.
    #[must_use]
    pub fn blank(player_count: usize, holes: usize, placeholder: &str) -> Self {
        let players = (0..player_count)
            .map(|i| PlayerRow::new(PlayerId(i as u32), placeholder, holes))
            .collect();
        Self { players }
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.scores.len())
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerRow> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerRow> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    #[must_use]
    pub fn cell_text(&self, cell: CellRef) -> Option<&str> {
        self.player(cell.player)
            .and_then(|p| p.scores.get(cell.hole))
            .map(|h| h.text(cell.side))
    }

    /// Returns `false` when the cell does not exist; nothing is written then.
    pub fn set_cell_text(&mut self, cell: CellRef, text: impl Into<String>) -> bool {
        match self
            .player_mut(cell.player)
            .and_then(|p| p.scores.get_mut(cell.hole))
        {
            Some(hole) => {
                hole.set_text(cell.side, text);
                true
            }
            None => false,
        }
    }

    pub fn set_name(&mut self, id: PlayerId, name: impl Into<String>) -> bool {
        match self.player_mut(id) {
            Some(p) => {
                p.name = name.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn total(&self, id: PlayerId) -> Option<i64> {
        self.player(id).map(PlayerRow::total)
    }
}
