#![allow(dead_code)]

use std::collections::HashMap;

use minigolf_core::error::CoreError;
use minigolf_core::model::{CellRef, PlayerId, Scoreboard, Side};
use minigolf_core::mvu::{BoardView, Deps, Msg, ScoreboardModel, run_scoreboard};
use minigolf_core::storage::MemoryStore;

/// Records what the controller paints, keyed like the real DOM.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub names: HashMap<PlayerId, String>,
    pub cells: HashMap<CellRef, String>,
    pub totals: HashMap<PlayerId, i64>,
    pub editor: Option<(CellRef, String)>,
    pub focused_name: Option<PlayerId>,
    pub modal_visible: bool,
    pub layout_syncs: usize,
}

impl RecordingView {
    /// Starts from what the server rendered for `board`.
    pub fn rendered(board: &Scoreboard) -> Self {
        let mut view = RecordingView::default();
        for row in &board.players {
            view.names.insert(row.id, row.name.clone());
            view.totals.insert(row.id, row.total());
            for (hole, score) in row.scores.iter().enumerate() {
                view.cells.insert(CellRef::new(row.id, hole, Side::Plus), score.plus.clone());
                view.cells.insert(CellRef::new(row.id, hole, Side::Minus), score.minus.clone());
            }
        }
        view
    }

    pub fn cell(&self, player: u32, hole: usize, side: Side) -> &str {
        self.cells
            .get(&CellRef::new(PlayerId(player), hole, side))
            .map_or("", String::as_str)
    }

    pub fn total(&self, player: u32) -> i64 {
        self.totals[&PlayerId(player)]
    }

    pub fn name(&self, player: u32) -> &str {
        &self.names[&PlayerId(player)]
    }
}

impl BoardView for RecordingView {
    fn set_name(&mut self, player: PlayerId, name: &str) -> Result<(), CoreError> {
        self.names.insert(player, name.to_string());
        Ok(())
    }

    fn set_cell_text(&mut self, cell: CellRef, text: &str) -> Result<(), CoreError> {
        self.cells.insert(cell, text.to_string());
        Ok(())
    }

    fn set_total(&mut self, player: PlayerId, total: i64) -> Result<(), CoreError> {
        self.totals.insert(player, total);
        Ok(())
    }

    fn open_editor(&mut self, cell: CellRef, value: &str) -> Result<(), CoreError> {
        self.cells.insert(cell, String::new());
        self.editor = Some((cell, value.to_string()));
        Ok(())
    }

    fn close_editor(&mut self, cell: CellRef, text: &str) -> Result<(), CoreError> {
        self.editor = None;
        self.cells.insert(cell, text.to_string());
        Ok(())
    }

    fn focus_name(&mut self, player: PlayerId) -> Result<(), CoreError> {
        self.focused_name = Some(player);
        Ok(())
    }

    fn set_reset_modal_visible(&mut self, visible: bool) -> Result<(), CoreError> {
        self.modal_visible = visible;
        Ok(())
    }

    fn sync_layout(&mut self) -> Result<(), CoreError> {
        self.layout_syncs += 1;
        Ok(())
    }
}

/// A page with its controller, view and local storage wired together.
pub struct Page {
    pub model: ScoreboardModel,
    pub view: RecordingView,
    pub store: MemoryStore,
}

impl Page {
    pub fn open(board: Scoreboard, store: MemoryStore) -> Self {
        let view = RecordingView::rendered(&board);
        let mut page = Page {
            model: ScoreboardModel::new(board, "이름 입력"),
            view,
            store,
        };
        page.send(Msg::PageLoad).expect("page load should not fail");
        page
    }

    pub fn send(&mut self, msg: Msg) -> Result<(), CoreError> {
        let mut deps = Deps {
            view: &mut self.view,
            store: &mut self.store,
        };
        run_scoreboard(&mut self.model, msg, &mut deps)
    }

    /// Checks the rendered totals against the model text.
    pub fn assert_totals_consistent(&self) {
        for row in &self.model.board.players {
            assert_eq!(
                self.view.totals[&row.id],
                row.total(),
                "total of player {} drifted from its cells",
                row.id
            );
        }
    }
}
