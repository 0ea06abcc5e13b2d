use maud::{Markup, html};

use crate::model::Scoreboard;
use crate::view::score::utils::{
    FIXED_BODY_ID, SCROLL_CONTAINER_CLASS, SCROLLABLE_BODY_ID, hole_label, score_cell,
};

/// The pinned name/total table.
#[must_use]
pub fn render_fixed_table(board: &Scoreboard, placeholder: &str) -> Markup {
    html! {
        table class="fixed-scoreboard" {
            thead {
                tr {
                    th class="player-name-header" { "Player" }
                    th class="total-score-header" { "Total" }
                }
            }
            tbody id=(FIXED_BODY_ID) data-placeholder=(placeholder) {
                @for player in &board.players {
                    tr class="player-row" data-player-id=(player.id) {
                        td class="player-name" contenteditable="true" spellcheck="false" {
                            (player.name)
                        }
                        td class="total-score" { (player.total()) }
                    }
                }
            }
        }
    }
}

/// The horizontally scrolling per-hole table. Rows carry the same
/// `data-player-id` as their fixed-table counterparts.
#[must_use]
pub fn render_scrollable_table(board: &Scoreboard) -> Markup {
    let holes = board.hole_count();
    html! {
        div class=(SCROLL_CONTAINER_CLASS) {
            table class="scrollable-scoreboard" {
                thead {
                    tr {
                        @for hole in 0..holes {
                            th class="hole-header" { (hole_label(hole)) }
                        }
                    }
                }
                tbody id=(SCROLLABLE_BODY_ID) {
                    @for player in &board.players {
                        tr class="player-row" data-player-id=(player.id) {
                            @for (hole, score) in player.scores.iter().enumerate() {
                                (score_cell(hole, score))
                            }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_scoreboard(board: &Scoreboard, placeholder: &str) -> Markup {
    html! {
        div class="scoreboard-wrapper" {
            div class="fixed-scores-container" {
                (render_fixed_table(board, placeholder))
            }
            (render_scrollable_table(board))
        }
    }
}
