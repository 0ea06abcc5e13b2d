use clap::Parser;
use std::path::PathBuf;

use minigolf_core::model::Snapshot;
use minigolf_core::score::BoardRequest;
use minigolf_core::view::index::DEFAULT_INDEX_TITLE;
use minigolf_core::{DEFAULT_HOLE_COUNT, DEFAULT_PLACEHOLDER_NAME, DEFAULT_PLAYER_COUNT};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value_t = 5201)]
    pub port: u16,
    /// Page heading and document title.
    #[arg(long, value_name = "TITLE", default_value = DEFAULT_INDEX_TITLE)]
    pub title: String,
    /// Rows on a fresh board; `?players=` overrides per request.
    #[arg(
        long,
        value_name = "PLAYERS",
        default_value_t = DEFAULT_PLAYER_COUNT,
        value_parser = crate::args::validation::check_players
    )]
    pub players: usize,
    /// Hole columns on a fresh board; `?holes=` overrides per request.
    #[arg(
        long,
        value_name = "HOLES",
        default_value_t = DEFAULT_HOLE_COUNT,
        value_parser = crate::args::validation::check_holes
    )]
    pub holes: usize,
    /// Name shown on fresh rows and written back by "clear names and scores".
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PLACEHOLDER_NAME)]
    pub placeholder: String,
    /// Directory served under /static (stylesheet, wasm bundle in pkg/).
    #[arg(long, value_name = "DIR", default_value = "./static")]
    pub static_dir: PathBuf,
    /// Snapshot-shaped json whose names and scores pre-fill the rendered board.
    /// Browser-local data still wins once the page loads.
    #[arg(
        long,
        value_name = "SEED_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub seed_json: Option<Snapshot>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub title: String,
    pub static_dir: PathBuf,
    /// Defaults for requests that do not override the board size.
    pub board: BoardRequest,
    pub seed: Option<Snapshot>,
}
