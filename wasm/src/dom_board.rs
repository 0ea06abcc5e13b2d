use std::collections::HashMap;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use minigolf_core::error::CoreError;
use minigolf_core::model::{CellRef, HoleScore, PlayerId, PlayerRow, Scoreboard, Side};
use minigolf_core::mvu::{BoardView, Msg};
use minigolf_core::score::{
    EditKey, HeightPane, RowSlot, SCORE_INPUT_MAX, SCORE_INPUT_MIN, synchronize_row_heights,
};
use minigolf_core::view::score::{
    FIXED_BODY_ID, HIDDEN_CLASS, HOLE_ATTR, PLACEHOLDER_ATTR, PLAYER_ID_ATTR, RESET_MODAL_ID,
    SCROLLABLE_BODY_ID,
};
use minigolf_core::DEFAULT_PLACEHOLDER_NAME;

use crate::dispatch;
use crate::rust_error;
use crate::web_document::{WebDocument, select_all, select_html, web_document};
use crate::web_element_ext::WebEventTargetExt;
use crate::web_error_handling::{JsResult, js_error_message, view_error};

const EDITOR_STYLE: &str = "width: 100%; height: 100%; border: none; text-align: center; \
    box-sizing: border-box; font: inherit; background-color: inherit;";

type Listener = Closure<dyn FnMut(web_sys::Event) -> JsResult<()>>;

/// The numeric input currently sitting inside a score cell.
struct OpenEditor {
    cell: CellRef,
    was_editable: bool,
    _listeners: Vec<Listener>,
}

/// Player id of a `.player-row`, falling back to its position for markup
/// rendered without ids.
pub fn row_player_id(row: &web_sys::Element, position: usize) -> PlayerId {
    row.get_attribute(PLAYER_ID_ATTR)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(PlayerId(position as u32))
}

fn as_html(element: web_sys::Element) -> JsResult<web_sys::HtmlElement> {
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| rust_error!("element is not an HTML element"))
}

fn index_rows(body: &web_sys::Element) -> JsResult<Vec<(PlayerId, web_sys::HtmlElement)>> {
    select_all(body, ":scope > .player-row")?
        .into_iter()
        .enumerate()
        .map(|(position, row)| Ok((row_player_id(&row, position), as_html(row)?)))
        .collect()
}

/// The header `tr` of the table whose body is `body`.
fn header_row(body: &web_sys::Element) -> JsResult<Option<web_sys::HtmlElement>> {
    match body.previous_element_sibling() {
        Some(head) => select_html(&head, "tr"),
        None => Ok(None),
    }
}

/// One table as a stack of resizable rows.
struct TablePane {
    header: Option<web_sys::HtmlElement>,
    rows: Vec<(PlayerId, web_sys::HtmlElement)>,
}

impl TablePane {
    fn element(&self, slot: RowSlot) -> Option<&web_sys::HtmlElement> {
        match slot {
            RowSlot::Header => self.header.as_ref(),
            RowSlot::Player(id) => {
                self.rows.iter().find(|(row_id, _)| *row_id == id).map(|(_, row)| row)
            }
        }
    }

    fn set_style_height(&self, slot: RowSlot, value: &str) {
        if let Some(row) = self.element(slot) {
            if let Err(e) = row.style().set_property("height", value) {
                warn!("cannot set row height: {}", js_error_message(&e));
            }
        }
    }
}

impl HeightPane for TablePane {
    fn player_rows(&self) -> Vec<PlayerId> {
        self.rows.iter().map(|(id, _)| *id).collect()
    }

    fn contains(&self, slot: RowSlot) -> bool {
        self.element(slot).is_some()
    }

    fn clear_height(&mut self, slot: RowSlot) {
        self.set_style_height(slot, "");
    }

    fn natural_height(&self, slot: RowSlot) -> Option<f64> {
        self.element(slot).map(|row| f64::from(row.offset_height()))
    }

    fn set_height(&mut self, slot: RowSlot, px: f64) {
        self.set_style_height(slot, &format!("{px}px"));
    }
}

/// The two scoreboard tables and the reset dialog, addressed by player id.
pub struct DomBoard {
    fixed_body: web_sys::Element,
    scrollable_body: web_sys::Element,
    reset_modal: Option<web_sys::Element>,
    fixed_rows: Vec<(PlayerId, web_sys::HtmlElement)>,
    scrollable_rows: HashMap<PlayerId, web_sys::HtmlElement>,
    editor: Option<OpenEditor>,
}

impl DomBoard {
    pub fn from_document(document: &WebDocument) -> JsResult<Self> {
        let fixed_body = document.get_existing_element_by_id(FIXED_BODY_ID)?;
        let scrollable_body = document.get_existing_element_by_id(SCROLLABLE_BODY_ID)?;
        let fixed_rows = index_rows(&fixed_body)?;
        let scrollable_rows = index_rows(&scrollable_body)?.into_iter().collect();
        Ok(DomBoard {
            fixed_body,
            scrollable_body,
            reset_modal: document.get_element_by_id(RESET_MODAL_ID),
            fixed_rows,
            scrollable_rows,
            editor: None,
        })
    }

    pub fn placeholder(&self) -> String {
        self.fixed_body
            .get_attribute(PLACEHOLDER_ATTR)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER_NAME.to_string())
    }

    /// Reads the server-rendered names and cell text into a model. Fixed rows
    /// without a scrollable counterpart get no holes.
    pub fn read_board(&self) -> JsResult<Scoreboard> {
        let mut players = Vec::with_capacity(self.fixed_rows.len());
        for (id, fixed) in &self.fixed_rows {
            let name = select_html(fixed, ".player-name")?
                .and_then(|n| n.text_content())
                .unwrap_or_default();
            let scores = match self.scrollable_rows.get(id) {
                Some(row) => select_all(row, ".score-cell")?
                    .iter()
                    .map(|cell| {
                        Ok(HoleScore {
                            plus: half_text(cell, Side::Plus)?,
                            minus: half_text(cell, Side::Minus)?,
                        })
                    })
                    .collect::<JsResult<Vec<_>>>()?,
                None => Vec::new(),
            };
            players.push(PlayerRow {
                id: *id,
                name: name.trim().to_string(),
                scores,
            });
        }
        Ok(Scoreboard::new(players))
    }

    fn fixed_row(&self, player: PlayerId) -> Option<&web_sys::HtmlElement> {
        self.fixed_rows.iter().find(|(id, _)| *id == player).map(|(_, row)| row)
    }

    fn fixed_part(&self, player: PlayerId, selectors: &str) -> JsResult<web_sys::HtmlElement> {
        let row = self
            .fixed_row(player)
            .ok_or_else(|| rust_error!("no fixed row for player {}", player))?;
        select_html(row, selectors)?
            .ok_or_else(|| rust_error!("player {} has no {}", player, selectors))
    }

    fn cell_element(&self, cell: CellRef) -> JsResult<web_sys::HtmlElement> {
        let row = self
            .scrollable_rows
            .get(&cell.player)
            .ok_or_else(|| rust_error!("no score row for player {}", cell.player))?;
        let score_cell = select_all(row, ".score-cell")?
            .into_iter()
            .nth(cell.hole)
            .ok_or_else(|| rust_error!("player {} has no hole {}", cell.player, cell.hole))?;
        select_html(&score_cell, &format!(".{}", cell.side.class_name()))?
            .ok_or_else(|| rust_error!("hole {} has no {}", cell.hole, cell.side.class_name()))
    }

    /// Maps a click target inside the scrollable body to the cell it belongs to.
    pub fn locate_cell(&self, target: &web_sys::Element) -> JsResult<Option<CellRef>> {
        let Some(half) = target.closest(".score-plus, .score-minus")? else {
            return Ok(None);
        };
        let side = if half.class_list().contains(Side::Plus.class_name()) {
            Side::Plus
        } else {
            Side::Minus
        };
        let (Some(score_cell), Some(row)) =
            (half.closest(".score-cell")?, half.closest(".player-row")?)
        else {
            return Ok(None);
        };
        let Some(player) = self
            .scrollable_rows
            .iter()
            .find(|(_, element)| row.is_same_node(Some(element.as_ref())))
            .map(|(id, _)| *id)
        else {
            return Ok(None);
        };
        let hole = match score_cell.get_attribute(HOLE_ATTR).and_then(|raw| raw.parse().ok()) {
            Some(hole) => Some(hole),
            None => select_all(&row, ".score-cell")?
                .iter()
                .position(|c| c.is_same_node(Some(score_cell.as_ref()))),
        };
        Ok(hole.map(|hole| CellRef::new(player, hole, side)))
    }

    /// The player whose name cell contains `target`.
    pub fn locate_name(
        &self,
        target: &web_sys::Element,
    ) -> JsResult<Option<(PlayerId, web_sys::HtmlElement)>> {
        let Some(name) = target.closest(".player-name")? else {
            return Ok(None);
        };
        let player = self
            .fixed_rows
            .iter()
            .find(|(_, row)| row.contains(Some(name.as_ref())))
            .map(|(id, _)| *id);
        Ok(player.map(|id| (id, name.unchecked_into())))
    }

    /// Shows `text` in the cell. An editor open on that cell is taken down
    /// only after the text replaced its input, so a blur fired by the removal
    /// still finds its listener.
    fn write_cell(&mut self, cell: CellRef, text: &str) -> JsResult<()> {
        let element = self.cell_element(cell)?;
        let editor = self.editor.take_if(|e| e.cell == cell);
        element.set_text_content(Some(text));
        if let Some(editor) = editor {
            element.set_content_editable(if editor.was_editable { "true" } else { "false" });
        }
        Ok(())
    }

    fn open_editor_js(&mut self, cell: CellRef, value: &str) -> JsResult<()> {
        let element = self.cell_element(cell)?;
        let was_editable = element.is_content_editable();
        element.set_content_editable("false");
        element.set_text_content(Some(""));

        let document = web_document()?;
        let input: web_sys::HtmlInputElement = document.create_element("input")?.unchecked_into();
        input.set_type("number");
        input.set_attribute("inputmode", "numeric")?;
        input.set_attribute("pattern", "[0-9]*")?;
        input.set_min(&SCORE_INPUT_MIN.to_string());
        input.set_max(&SCORE_INPUT_MAX.to_string());
        input.set_value(value);
        input.set_attribute("style", EDITOR_STYLE)?;
        element.append_child(&input)?;

        let mut listeners = Vec::with_capacity(3);
        let target: &web_sys::EventTarget = input.as_ref();
        {
            let input = input.clone();
            listeners.push(target.add_event_listener_kept("keydown", move |event: web_sys::Event| {
                let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return Ok(());
                };
                let key = EditKey::from_key_name(&event.key());
                if key == EditKey::Enter {
                    event.prevent_default();
                }
                if key != EditKey::Other {
                    dispatch(Msg::EditKey { cell, key, value: input.value() });
                }
                Ok(())
            })?);
        }
        {
            let input = input.clone();
            listeners.push(target.add_event_listener_kept("input", move |_: web_sys::Event| {
                dispatch(Msg::EditInput { cell, text: input.value() });
                Ok(())
            })?);
        }
        {
            let input = input.clone();
            listeners.push(target.add_event_listener_kept("blur", move |_: web_sys::Event| {
                // a blur fired while the input is being detached carries no new value
                let attached = web_document()
                    .is_ok_and(|document| document.contains(input.as_ref()));
                if attached {
                    dispatch(Msg::EditBlurred { cell, value: input.value() });
                }
                Ok(())
            })?);
        }

        self.editor = Some(OpenEditor {
            cell,
            was_editable,
            _listeners: listeners,
        });
        input.focus()?;
        input.select();
        Ok(())
    }

    fn set_modal_js(&self, visible: bool) -> JsResult<()> {
        let modal = self
            .reset_modal
            .as_ref()
            .ok_or_else(|| rust_error!("reset dialog is missing"))?;
        if visible {
            modal.class_list().remove_1(HIDDEN_CLASS)
        } else {
            modal.class_list().add_1(HIDDEN_CLASS)
        }
    }

    fn panes(&self) -> JsResult<(TablePane, TablePane)> {
        let fixed = TablePane {
            header: header_row(&self.fixed_body)?,
            rows: self.fixed_rows.clone(),
        };
        let scrollable = TablePane {
            header: header_row(&self.scrollable_body)?,
            rows: index_rows(&self.scrollable_body)?,
        };
        Ok((fixed, scrollable))
    }
}

fn half_text(cell: &web_sys::Element, side: Side) -> JsResult<String> {
    Ok(select_html(cell, &format!(".{}", side.class_name()))?
        .and_then(|half| half.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default())
}

impl BoardView for DomBoard {
    fn set_name(&mut self, player: PlayerId, name: &str) -> Result<(), CoreError> {
        let element = self.fixed_part(player, ".player-name").map_err(view_error)?;
        // rewriting identical text would move the caret of a focused name cell
        if element.text_content().as_deref() != Some(name) {
            element.set_text_content(Some(name));
        }
        Ok(())
    }

    fn set_cell_text(&mut self, cell: CellRef, text: &str) -> Result<(), CoreError> {
        self.write_cell(cell, text).map_err(view_error)
    }

    fn set_total(&mut self, player: PlayerId, total: i64) -> Result<(), CoreError> {
        let element = self.fixed_part(player, ".total-score").map_err(view_error)?;
        element.set_text_content(Some(&total.to_string()));
        Ok(())
    }

    fn open_editor(&mut self, cell: CellRef, value: &str) -> Result<(), CoreError> {
        self.open_editor_js(cell, value).map_err(view_error)
    }

    fn close_editor(&mut self, cell: CellRef, text: &str) -> Result<(), CoreError> {
        self.write_cell(cell, text).map_err(view_error)
    }

    fn focus_name(&mut self, player: PlayerId) -> Result<(), CoreError> {
        let element = self.fixed_part(player, ".player-name").map_err(view_error)?;
        element.focus().map_err(view_error)
    }

    fn set_reset_modal_visible(&mut self, visible: bool) -> Result<(), CoreError> {
        self.set_modal_js(visible).map_err(view_error)
    }

    fn sync_layout(&mut self) -> Result<(), CoreError> {
        let (mut fixed, mut scrollable) = self.panes().map_err(view_error)?;
        synchronize_row_heights(&mut fixed, &mut scrollable);
        Ok(())
    }
}
