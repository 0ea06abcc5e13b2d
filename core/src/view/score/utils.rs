use maud::{Markup, html};

use crate::model::{HoleScore, Side};

pub const FIXED_BODY_ID: &str = "fixed-scoreboard-body";
pub const SCROLLABLE_BODY_ID: &str = "scrollable-scoreboard-body";
pub const SCROLL_CONTAINER_CLASS: &str = "scrollable-scores-container";
pub const PLAYER_ID_ATTR: &str = "data-player-id";
pub const HOLE_ATTR: &str = "data-hole";
pub const PLACEHOLDER_ATTR: &str = "data-placeholder";

/// One half of a score cell: the text a player taps to edit.
#[must_use]
pub fn score_half(side: Side, text: &str) -> Markup {
    html! {
        div class=(side.class_name()) { (text) }
    }
}

#[must_use]
pub fn score_cell(hole: usize, score: &HoleScore) -> Markup {
    html! {
        td class="score-cell" data-hole=(hole) {
            (score_half(Side::Plus, &score.plus))
            (score_half(Side::Minus, &score.minus))
        }
    }
}

/// Column header label, holes are numbered from one.
#[must_use]
pub fn hole_label(hole: usize) -> String {
    (hole + 1).to_string()
}
