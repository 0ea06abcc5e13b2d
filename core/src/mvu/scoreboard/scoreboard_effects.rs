
use crate::error::CoreError;
use crate::model::{CellRef, PlayerId, Side};
use crate::mvu::scoreboard::{Effect, Msg, ScoreboardModel};
use crate::score::persistence;
use crate::storage::KeyValueStore;

/// The rendered page, as the controller sees it.
pub trait BoardView {
    /// # Errors
    /// Returns `CoreError::View` if the row cannot be written.
    fn set_name(&mut self, player: PlayerId, name: &str) -> Result<(), CoreError>;
    /// # Errors
    /// Returns `CoreError::View` if the cell cannot be written.
    fn set_cell_text(&mut self, cell: CellRef, text: &str) -> Result<(), CoreError>;
    /// # Errors
    /// Returns `CoreError::View` if the total cannot be written.
    fn set_total(&mut self, player: PlayerId, total: i64) -> Result<(), CoreError>;
    /// Replaces the cell text with a focused numeric input holding `value`.
    ///
    /// # Errors
    /// Returns `CoreError::View` if the input cannot be created.
    fn open_editor(&mut self, cell: CellRef, value: &str) -> Result<(), CoreError>;
    /// Removes the input and shows `text` in its place.
    ///
    /// # Errors
    /// Returns `CoreError::View` if the cell cannot be written.
    fn close_editor(&mut self, cell: CellRef, text: &str) -> Result<(), CoreError>;
    /// # Errors
    /// Returns `CoreError::View` if the name cell cannot be focused.
    fn focus_name(&mut self, player: PlayerId) -> Result<(), CoreError>;
    /// # Errors
    /// Returns `CoreError::View` if the dialog is missing from the page.
    fn set_reset_modal_visible(&mut self, visible: bool) -> Result<(), CoreError>;
    /// Equalizes paired row heights, see [`crate::score::synchronize_row_heights`].
    ///
    /// # Errors
    /// Returns `CoreError::View` if the tables cannot be measured.
    fn sync_layout(&mut self) -> Result<(), CoreError>;
}

pub struct Deps<'a> {
    pub view: &'a mut dyn BoardView,
    pub store: &'a mut dyn KeyValueStore,
}

fn render_board(model: &ScoreboardModel, view: &mut dyn BoardView) -> Result<(), CoreError> {
    for row in &model.board.players {
        view.set_name(row.id, &row.name)?;
        for (hole, score) in row.scores.iter().enumerate() {
            view.set_cell_text(CellRef::new(row.id, hole, Side::Plus), &score.plus)?;
            view.set_cell_text(CellRef::new(row.id, hole, Side::Minus), &score.minus)?;
        }
        view.set_total(row.id, row.total())?;
    }
    Ok(())
}

fn into_msg(result: Result<(), CoreError>) -> Option<Msg> {
    result.err().map(Msg::Failed)
}

/// Runs one effect. Returns the message it produced, if any.
pub fn run_effect(effect: Effect, model: &ScoreboardModel, deps: &mut Deps<'_>) -> Option<Msg> {
    match effect {
        Effect::LoadSnapshot => Some(Msg::SnapshotLoaded(persistence::read_stored(deps.store))),
        Effect::RenderBoard => into_msg(render_board(model, deps.view)),
        Effect::RenderTotal(player) => match model.board.total(player) {
            Some(total) => into_msg(deps.view.set_total(player, total)),
            None => None,
        },
        Effect::OpenEditor { cell, value } => into_msg(deps.view.open_editor(cell, &value)),
        Effect::CloseEditor { cell, text } => into_msg(deps.view.close_editor(cell, &text)),
        Effect::FocusName(player) => into_msg(deps.view.focus_name(player)),
        Effect::SetResetModal(visible) => into_msg(deps.view.set_reset_modal_visible(visible)),
        Effect::SyncLayout => into_msg(deps.view.sync_layout()),
        Effect::Save => match persistence::save(&model.board, deps.store) {
            Ok(()) => Some(Msg::Saved),
            Err(e) => Some(Msg::Failed(e)),
        },
    }
}
