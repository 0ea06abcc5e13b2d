use crate::model::Scoreboard;

/// The three ways out of the reset dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetChoice {
    Dismiss,
    ScoresOnly,
    Everything,
}

impl ResetChoice {
    #[must_use]
    pub fn mutates(self) -> bool {
        !matches!(self, ResetChoice::Dismiss)
    }
}

/// Applies `choice` to every row. Returns whether anything was written.
pub fn apply_reset(board: &mut Scoreboard, choice: ResetChoice, placeholder: &str) -> bool {
    match choice {
        ResetChoice::Dismiss => false,
        ResetChoice::ScoresOnly => {
            board.players.iter_mut().for_each(|p| p.zero_scores());
            true
        }
        ResetChoice::Everything => {
            for player in &mut board.players {
                player.zero_scores();
                player.name = placeholder.to_string();
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellRef, PlayerId, Side};

    fn played_board() -> Scoreboard {
        let mut board = Scoreboard::blank(2, 2, "-");
        board.set_name(PlayerId(0), "Alice");
        board.set_name(PlayerId(1), "Bob");
        board.set_cell_text(CellRef::new(PlayerId(0), 0, Side::Plus), "3");
        board.set_cell_text(CellRef::new(PlayerId(1), 1, Side::Minus), "x");
        board.set_cell_text(CellRef::new(PlayerId(1), 0, Side::Plus), "5");
        board
    }

    #[test]
    fn scores_only_keeps_names() {
        let mut board = played_board();
        assert!(apply_reset(&mut board, ResetChoice::ScoresOnly, "placeholder"));
        let names: Vec<_> = board.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert!(board.players.iter().all(|p| p.total() == 0));
        assert!(board
            .players
            .iter()
            .flat_map(|p| &p.scores)
            .all(|h| h.plus == "0" && h.minus == "0"));
    }

    #[test]
    fn everything_replaces_names() {
        let mut board = played_board();
        assert!(apply_reset(&mut board, ResetChoice::Everything, "placeholder"));
        assert!(board.players.iter().all(|p| p.name == "placeholder" && p.total() == 0));
    }

    #[test]
    fn dismiss_changes_nothing() {
        let mut board = played_board();
        assert!(!apply_reset(&mut board, ResetChoice::Dismiss, "placeholder"));
        assert_eq!(board, played_board());
    }
}
