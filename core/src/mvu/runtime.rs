use log::debug;
use serde_json::json;
use std::collections::VecDeque;

use crate::error::CoreError;
use crate::mvu::scoreboard::{Deps, Msg, ScoreboardModel, run_effect, update};

/// Runs the MVU loop for the scoreboard: seeds with `init_msg` and drains
/// effects in the order `update` queued them.
///
/// A failing effect does not stop the loop; the remaining effects still run.
///
/// # Errors
///
/// Returns the first `CoreError` surfaced while draining.
pub fn run_scoreboard(
    model: &mut ScoreboardModel,
    init_msg: Msg,
    deps: &mut Deps<'_>,
) -> Result<(), CoreError> {
    let mut first_error = None;
    let mut effects: VecDeque<_> = update(model, init_msg).into();
    while let Some(effect) = effects.pop_front() {
        if cfg!(debug_assertions) {
            debug!(
                "{}",
                json!({"mvu":"effect_start","effect": format!("{effect:?}")})
            );
        }
        let Some(msg) = run_effect(effect, model, deps) else {
            continue;
        };
        if cfg!(debug_assertions) {
            debug!("{}", json!({"mvu":"effect_done","msg": format!("{msg:?}")}));
        }
        if let Msg::Failed(e) = &msg {
            first_error.get_or_insert_with(|| e.clone());
        }
        effects.extend(update(model, msg));
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellRef, PlayerId, Scoreboard};
    use crate::mvu::BoardView;
    use crate::storage::MemoryStore;

    /// Paints nothing and cannot measure rows.
    struct UnmeasurableView;

    impl BoardView for UnmeasurableView {
        fn set_name(&mut self, _: PlayerId, _: &str) -> Result<(), CoreError> {
            Ok(())
        }
        fn set_cell_text(&mut self, _: CellRef, _: &str) -> Result<(), CoreError> {
            Ok(())
        }
        fn set_total(&mut self, _: PlayerId, _: i64) -> Result<(), CoreError> {
            Ok(())
        }
        fn open_editor(&mut self, _: CellRef, _: &str) -> Result<(), CoreError> {
            Ok(())
        }
        fn close_editor(&mut self, _: CellRef, _: &str) -> Result<(), CoreError> {
            Ok(())
        }
        fn focus_name(&mut self, _: PlayerId) -> Result<(), CoreError> {
            Ok(())
        }
        fn set_reset_modal_visible(&mut self, _: bool) -> Result<(), CoreError> {
            Ok(())
        }
        fn sync_layout(&mut self) -> Result<(), CoreError> {
            Err(CoreError::View("rows detached".into()))
        }
    }

    #[test]
    fn failed_effect_is_recorded_and_returned() {
        let mut model = ScoreboardModel::new(Scoreboard::blank(1, 2, "p"), "p");
        let mut view = UnmeasurableView;
        let mut store = MemoryStore::new();
        let mut deps = Deps {
            view: &mut view,
            store: &mut store,
        };

        let result = run_scoreboard(&mut model, Msg::Resized, &mut deps);

        assert!(matches!(result, Err(CoreError::View(_))));
        assert!(matches!(model.error, Some(CoreError::View(_))));
    }

    #[test]
    fn page_load_still_loads_when_sync_fails() {
        let mut model = ScoreboardModel::new(Scoreboard::blank(1, 2, "p"), "p");
        let mut view = UnmeasurableView;
        let mut store = MemoryStore::new();
        let mut deps = Deps {
            view: &mut view,
            store: &mut store,
        };

        // load paints and then syncs; only the sync fails
        let result = run_scoreboard(&mut model, Msg::PageLoad, &mut deps);

        assert!(result.is_err());
        assert_eq!(model.load_outcome, Some(crate::score::LoadOutcome::Empty));
    }
}
