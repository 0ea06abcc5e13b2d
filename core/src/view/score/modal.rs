use maud::{Markup, html};

pub const RESET_BUTTON_ID: &str = "reset-button";
pub const RESET_MODAL_ID: &str = "reset-modal";
pub const CLOSE_MODAL_ID: &str = "close-modal";
pub const RESET_SCORE_ONLY_ID: &str = "reset-score-only";
pub const RESET_ALL_ID: &str = "reset-all";
pub const HIDDEN_CLASS: &str = "hidden";

#[must_use]
pub fn render_reset_button() -> Markup {
    html! {
        button type="button" id=(RESET_BUTTON_ID) class="reset-button" { "Reset" }
    }
}

/// Hidden until the reset button removes [`HIDDEN_CLASS`]; clicking the
/// overlay outside the dialog dismisses it.
#[must_use]
pub fn render_reset_modal() -> Markup {
    html! {
        div id=(RESET_MODAL_ID) class={ "modal-overlay " (HIDDEN_CLASS) } {
            div class="modal" role="dialog" aria-modal="true" aria-labelledby="reset-modal-title" {
                h2 id="reset-modal-title" { "Reset the scoreboard?" }
                div class="modal-actions" {
                    button type="button" id=(RESET_SCORE_ONLY_ID) { "Clear scores only" }
                    button type="button" id=(RESET_ALL_ID) { "Clear names and scores" }
                    button type="button" id=(CLOSE_MODAL_ID) { "Cancel" }
                }
            }
        }
    }
}
