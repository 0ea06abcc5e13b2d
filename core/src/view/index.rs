use maud::{Markup, html};

use crate::model::Scoreboard;
use crate::view::score::{render_reset_button, render_reset_modal, render_scoreboard};

pub const DEFAULT_INDEX_TITLE: &str = "Mini Golf Scoreboard";

/// Path of the wasm-pack `--target web` bundle, relative to the page.
pub const WASM_BUNDLE_PATH: &str = "static/pkg/minigolf_wasm.js";

fn bootstrap_script() -> String {
    format!("import init from \"./{WASM_BUNDLE_PATH}\";\ninit();")
}

#[must_use]
pub fn render_index_template(title: &str, board: &Scoreboard, placeholder: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="ko" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" href="static/scoreboard.css";
                title { (title) }
                script type="module" { (maud::PreEscaped(bootstrap_script())) }
            }
            body {
                header class="board-header" {
                    h1 { (title) }
                    (render_reset_button())
                }
                (render_scoreboard(board, placeholder))
                (render_reset_modal())
            }
        }
    }
}
