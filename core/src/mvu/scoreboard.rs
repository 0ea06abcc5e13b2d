use log::error;

use crate::error::CoreError;
use crate::model::{CellRef, PlayerId, Scoreboard};
use crate::score::{EditKey, EditOutcome, EditState, LoadOutcome, ResetChoice};
use crate::score::{apply_reset, load_from_json};

mod scoreboard_effects;

pub use scoreboard_effects::{BoardView, Deps, run_effect};

/// Everything the page controller owns: the board and the cell being edited.
#[derive(Debug, Clone)]
pub struct ScoreboardModel {
    pub board: Scoreboard,
    pub edit: EditState,
    pub placeholder: String,
    pub load_outcome: Option<LoadOutcome>,
    pub error: Option<CoreError>,
}

impl ScoreboardModel {
    #[must_use]
    pub fn new(board: Scoreboard, placeholder: impl Into<String>) -> Self {
        Self {
            board,
            edit: EditState::Idle,
            placeholder: placeholder.into(),
            load_outcome: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    SnapshotLoaded(Option<String>),
    CellClicked(CellRef),
    /// Edit messages name their cell; ones for a cell no longer being edited
    /// (a late blur from a removed input) are dropped.
    EditInput { cell: CellRef, text: String },
    EditKey { cell: CellRef, key: EditKey, value: String },
    EditBlurred { cell: CellRef, value: String },
    NameClicked(PlayerId),
    NameEdited { player: PlayerId, text: String },
    ResetRequested,
    ResetChosen(ResetChoice),
    Resized,
    Scrolled,
    Saved,
    Failed(CoreError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadSnapshot,
    /// Repaint every name, cell and total from the model.
    RenderBoard,
    RenderTotal(PlayerId),
    OpenEditor { cell: CellRef, value: String },
    CloseEditor { cell: CellRef, text: String },
    FocusName(PlayerId),
    SetResetModal(bool),
    SyncLayout,
    Save,
}

fn finish_edit(model: &mut ScoreboardModel, outcome: EditOutcome) -> Vec<Effect> {
    match outcome {
        EditOutcome::Committed { cell, text } => {
            model.board.set_cell_text(cell, text.clone());
            vec![
                Effect::CloseEditor { cell, text },
                Effect::RenderTotal(cell.player),
                Effect::SyncLayout,
                Effect::Save,
            ]
        }
        EditOutcome::Reverted { cell, text } => vec![Effect::CloseEditor { cell, text }],
    }
}

pub fn update(model: &mut ScoreboardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => vec![Effect::LoadSnapshot],
        Msg::SnapshotLoaded(json) => {
            let outcome = load_from_json(&mut model.board, json.as_deref());
            if outcome == LoadOutcome::Skipped {
                model.error = Some(CoreError::Parse("stored scoreboard is unreadable".into()));
            }
            model.load_outcome = Some(outcome);
            vec![Effect::RenderBoard, Effect::SyncLayout]
        }
        Msg::CellClicked(cell) => {
            let Some(current) = model.board.cell_text(cell).map(str::to_string) else {
                return vec![];
            };
            if model.edit.is_editing(cell) {
                return vec![];
            }
            let mut effects = match model.edit.commit(None) {
                Some(previous) => finish_edit(model, previous),
                None => vec![],
            };
            model.edit.begin(cell, &current);
            effects.push(Effect::OpenEditor {
                cell,
                value: current.trim().to_string(),
            });
            effects
        }
        Msg::EditInput { cell, text } => {
            if model.edit.is_editing(cell) {
                model.edit.set_draft(&text);
            }
            vec![]
        }
        Msg::EditKey { cell, .. } | Msg::EditBlurred { cell, .. }
            if !model.edit.is_editing(cell) =>
        {
            vec![]
        }
        Msg::EditKey { key, value, .. } => match key {
            EditKey::Enter => match model.edit.commit(Some(&value)) {
                Some(outcome) => finish_edit(model, outcome),
                None => vec![],
            },
            EditKey::Escape => match model.edit.revert() {
                Some(outcome) => finish_edit(model, outcome),
                None => vec![],
            },
            EditKey::Other => vec![],
        },
        Msg::EditBlurred { value, .. } => match model.edit.commit(Some(&value)) {
            Some(outcome) => finish_edit(model, outcome),
            None => vec![],
        },
        Msg::NameClicked(player) => match model.board.player(player) {
            Some(row) if row.name.trim().is_empty() => vec![Effect::FocusName(player)],
            _ => vec![],
        },
        Msg::NameEdited { player, text } => {
            if model.board.set_name(player, text) {
                vec![Effect::SyncLayout, Effect::Save]
            } else {
                vec![]
            }
        }
        Msg::ResetRequested => vec![Effect::SetResetModal(true)],
        Msg::ResetChosen(choice) => {
            if !choice.mutates() {
                return vec![Effect::SetResetModal(false)];
            }
            model.edit = EditState::Idle;
            apply_reset(&mut model.board, choice, &model.placeholder);
            vec![
                Effect::RenderBoard,
                Effect::SyncLayout,
                Effect::Save,
                Effect::SetResetModal(false),
            ]
        }
        Msg::Resized | Msg::Scrolled => vec![Effect::SyncLayout],
        Msg::Saved => vec![],
        Msg::Failed(e) => {
            error!("{e}");
            model.error = Some(e);
            vec![]
        }
    }
}
