use crate::model::CellRef;

/// Advisory bounds put on the numeric input; out-of-range text is still accepted.
pub const SCORE_INPUT_MIN: u8 = 0;
pub const SCORE_INPUT_MAX: u8 = 99;

/// Keys the edit controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
    Other,
}

impl EditKey {
    /// Maps a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "Enter" => EditKey::Enter,
            "Escape" | "Esc" => EditKey::Escape,
            _ => EditKey::Other,
        }
    }
}

/// Text written back to a score cell on commit. Empty input becomes `"0"`.
#[must_use]
pub fn committed_score_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// One cell in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub cell: CellRef,
    /// Text shown before editing began; restored on revert.
    pub original: String,
    /// Latest input text.
    pub draft: String,
}

/// How an edit ended. Either way the cell goes back to display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Committed { cell: CellRef, text: String },
    Reverted { cell: CellRef, text: String },
}

/// At most one cell is edited at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(EditSession),
}

impl EditState {
    #[must_use]
    pub fn active_cell(&self) -> Option<CellRef> {
        match self {
            EditState::Idle => None,
            EditState::Editing(session) => Some(session.cell),
        }
    }

    #[must_use]
    pub fn is_editing(&self, cell: CellRef) -> bool {
        self.active_cell() == Some(cell)
    }

    /// Starts editing `cell` with `current` as both revert value and draft.
    ///
    /// Returns `false` if `cell` is already being edited. Any other session
    /// must be finished by the caller first; it is replaced here.
    pub fn begin(&mut self, cell: CellRef, current: &str) -> bool {
        if self.is_editing(cell) {
            return false;
        }
        let current = current.trim().to_string();
        *self = EditState::Editing(EditSession {
            cell,
            original: current.clone(),
            draft: current,
        });
        true
    }

    pub fn set_draft(&mut self, text: &str) {
        if let EditState::Editing(session) = self {
            session.draft = text.to_string();
        }
    }

    /// Commits `value`, or the last draft when `value` is `None`.
    pub fn commit(&mut self, value: Option<&str>) -> Option<EditOutcome> {
        match std::mem::take(self) {
            EditState::Idle => None,
            EditState::Editing(session) => {
                let raw = value.unwrap_or(session.draft.as_str());
                Some(EditOutcome::Committed {
                    cell: session.cell,
                    text: committed_score_text(raw),
                })
            }
        }
    }

    pub fn revert(&mut self) -> Option<EditOutcome> {
        match std::mem::take(self) {
            EditState::Idle => None,
            EditState::Editing(session) => Some(EditOutcome::Reverted {
                cell: session.cell,
                text: session.original,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlayerId, Side};

    fn cell(hole: usize) -> CellRef {
        CellRef::new(PlayerId(0), hole, Side::Plus)
    }

    #[test]
    fn reentering_the_same_cell_is_a_noop() {
        let mut state = EditState::default();
        assert!(state.begin(cell(0), "5"));
        state.set_draft("7");
        assert!(!state.begin(cell(0), "ignored"));
        assert_eq!(
            state.commit(None),
            Some(EditOutcome::Committed { cell: cell(0), text: "7".into() })
        );
    }

    #[test]
    fn revert_restores_original_text() {
        let mut state = EditState::default();
        state.begin(cell(1), " 5 ");
        state.set_draft("12");
        let outcome = state.revert().unwrap();
        assert_eq!(outcome, EditOutcome::Reverted { cell: cell(1), text: "5".into() });
        assert_eq!(state, EditState::Idle);
    }

    #[test]
    fn finishing_twice_yields_nothing() {
        let mut state = EditState::default();
        state.begin(cell(0), "1");
        assert!(state.revert().is_some());
        assert!(state.commit(Some("9")).is_none());
        assert!(state.revert().is_none());
    }

    #[test]
    fn empty_commit_defaults_to_zero() {
        assert_eq!(committed_score_text(""), "0");
        assert_eq!(committed_score_text("  "), "0");
        assert_eq!(committed_score_text(" 12"), "12");
    }

    #[test]
    fn maps_key_names() {
        assert_eq!(EditKey::from_key_name("Enter"), EditKey::Enter);
        assert_eq!(EditKey::from_key_name("Escape"), EditKey::Escape);
        assert_eq!(EditKey::from_key_name("a"), EditKey::Other);
    }
}
