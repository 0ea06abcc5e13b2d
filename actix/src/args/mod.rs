use clap::Parser;

use minigolf_core::score::BoardRequest;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// Parses and validates the command line.
///
/// # Errors
///
/// Returns a readable message if the arguments are inconsistent.
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl Args {
    /// Checks that need more than one flag at a time.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the placeholder is blank or the seed file does not fit the board.
    pub fn validate(&self) -> Result<(), String> {
        if self.placeholder.trim().is_empty() {
            return Err("placeholder must not be blank".to_string());
        }
        if let Some(seed) = &self.seed_json {
            if seed.players.len() > self.players {
                return Err(format!(
                    "seed json has {} players but the board only has {}",
                    seed.players.len(),
                    self.players
                ));
            }
            if let Some(long) = seed.players.iter().find(|p| p.scores.len() > self.holes) {
                return Err(format!(
                    "seed json player '{}' has {} holes but the board only has {}",
                    long.name,
                    long.scores.len(),
                    self.holes
                ));
            }
        }
        Ok(())
    }
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            bind: args.bind,
            port: args.port,
            title: args.title,
            static_dir: args.static_dir,
            board: BoardRequest {
                players: args.players,
                holes: args.holes,
                placeholder: args.placeholder.trim().to_string(),
            },
            seed: args.seed_json,
        }
    }
}
