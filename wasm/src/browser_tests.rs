use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use minigolf_core::STORAGE_KEY;
use minigolf_core::model::{CellRef, PlayerId, Scoreboard, Side};
use minigolf_core::mvu::BoardView;
use minigolf_core::view::score::{
    HIDDEN_CLASS, HOLE_ATTR, render_reset_button, render_reset_modal, render_scoreboard,
};

use crate::dom_board::{DomBoard, row_player_id};
use crate::web_document::{WebDocument, web_document, web_window};

wasm_bindgen_test_configure!(run_in_browser);

const PLACEHOLDER: &str = "이름 입력";

fn alice_and_bob() -> Scoreboard {
    let mut board = Scoreboard::blank(2, 3, PLACEHOLDER);
    board.set_name(PlayerId(0), "Alice");
    board.set_name(PlayerId(1), "Bob");
    board.set_cell_text(CellRef::new(PlayerId(0), 0, Side::Plus), "4");
    board.set_cell_text(CellRef::new(PlayerId(1), 2, Side::Minus), "1");
    board
}

fn raw_document() -> web_sys::Document {
    web_window().unwrap().document().unwrap()
}

/// Replaces the page body with the server markup for `board` and forgets
/// anything an earlier test saved.
fn render(board: &Scoreboard) -> WebDocument {
    if let Ok(Some(storage)) = web_window().unwrap().local_storage() {
        storage.remove_item(STORAGE_KEY).unwrap();
    }
    let markup = format!(
        "{}{}{}",
        render_scoreboard(board, PLACEHOLDER).into_string(),
        render_reset_button().into_string(),
        render_reset_modal().into_string()
    );
    raw_document().body().unwrap().set_inner_html(&markup);
    web_document().unwrap()
}

fn mount(board: &Scoreboard) {
    let document = render(board);
    crate::mount(&document).unwrap();
}

fn element(selectors: &str) -> web_sys::HtmlElement {
    raw_document()
        .query_selector(selectors)
        .unwrap()
        .unwrap_or_else(|| panic!("{selectors} should be on the page"))
        .dyn_into()
        .unwrap()
}

fn half(player: u32, hole: usize, side: Side) -> web_sys::HtmlElement {
    element(&format!(
        "#scrollable-scoreboard-body [data-player-id=\"{player}\"] \
         .score-cell[data-hole=\"{hole}\"] .{}",
        side.class_name()
    ))
}

fn fixed_part(player: u32, class: &str) -> web_sys::HtmlElement {
    element(&format!("#fixed-scoreboard-body [data-player-id=\"{player}\"] .{class}"))
}

fn editor_in(cell: &web_sys::HtmlElement) -> Option<web_sys::HtmlInputElement> {
    cell.query_selector("input").unwrap().map(|input| input.unchecked_into())
}

fn text(element: &web_sys::HtmlElement) -> String {
    element.text_content().unwrap_or_default()
}

fn press(target: &web_sys::EventTarget, key: &str, composing: bool) {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_is_composing(composing);
    let event =
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn is_focused(element: &web_sys::HtmlElement) -> bool {
    raw_document()
        .active_element()
        .is_some_and(|active| active.is_same_node(Some(element.as_ref())))
}

fn stored() -> String {
    web_window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item(STORAGE_KEY)
        .unwrap()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn row_ids_fall_back_to_position() {
    let row = raw_document().create_element("tr").unwrap();
    assert_eq!(row_player_id(&row, 3), PlayerId(3));
    row.set_attribute("data-player-id", "7").unwrap();
    assert_eq!(row_player_id(&row, 3), PlayerId(7));
    row.set_attribute("data-player-id", "seven").unwrap();
    assert_eq!(row_player_id(&row, 3), PlayerId(3));
}

#[wasm_bindgen_test]
fn read_board_matches_rendered_board() {
    let board = alice_and_bob();
    let document = render(&board);
    let dom = DomBoard::from_document(&document).unwrap();
    assert_eq!(dom.read_board().unwrap(), board);
    assert_eq!(dom.placeholder(), PLACEHOLDER);
}

#[wasm_bindgen_test]
fn locate_cell_reads_hole_and_side() {
    let document = render(&alice_and_bob());
    let dom = DomBoard::from_document(&document).unwrap();

    let minus = half(1, 2, Side::Minus);
    let expected = CellRef::new(PlayerId(1), 2, Side::Minus);
    assert_eq!(dom.locate_cell(&minus).unwrap(), Some(expected));
    assert_eq!(dom.locate_cell(&fixed_part(0, "player-name")).unwrap(), None);

    // without the hole attribute the cell's position in its row decides
    minus.parent_element().unwrap().remove_attribute(HOLE_ATTR).unwrap();
    assert_eq!(dom.locate_cell(&minus).unwrap(), Some(expected));
}

#[wasm_bindgen_test]
fn editor_opens_and_closes_in_place() {
    let document = render(&alice_and_bob());
    let mut dom = DomBoard::from_document(&document).unwrap();
    let cell = CellRef::new(PlayerId(0), 0, Side::Plus);

    dom.open_editor(cell, "4").unwrap();
    let input = editor_in(&half(0, 0, Side::Plus)).expect("editor should be open");
    assert_eq!(input.value(), "4");
    assert_eq!(input.type_(), "number");
    assert_eq!(input.get_attribute("inputmode").as_deref(), Some("numeric"));

    dom.close_editor(cell, "6").unwrap();
    let plus = half(0, 0, Side::Plus);
    assert!(editor_in(&plus).is_none());
    assert_eq!(text(&plus), "6");

    // a repaint of the cell takes an open editor down with it
    dom.open_editor(cell, "6").unwrap();
    dom.set_cell_text(cell, "0").unwrap();
    assert!(editor_in(&half(0, 0, Side::Plus)).is_none());
    assert_eq!(text(&half(0, 0, Side::Plus)), "0");
}

#[wasm_bindgen_test]
fn enter_commits_and_a_late_blur_is_ignored() {
    mount(&alice_and_bob());

    half(0, 1, Side::Plus).click();
    let input = editor_in(&half(0, 1, Side::Plus)).expect("click should open the editor");
    assert_eq!(input.value(), "0");
    input.set_value("12");
    press(&input, "Enter", false);

    assert!(editor_in(&half(0, 1, Side::Plus)).is_none());
    assert_eq!(text(&half(0, 1, Side::Plus)), "12");
    assert_eq!(text(&fixed_part(0, "total-score")), "16");
    assert!(stored().contains("\"12\""));

    input.set_value("99");
    input.dispatch_event(&web_sys::Event::new("blur").unwrap()).unwrap();
    assert_eq!(text(&half(0, 1, Side::Plus)), "12");
    assert_eq!(text(&fixed_part(0, "total-score")), "16");
}

#[wasm_bindgen_test]
fn escape_restores_the_original_text() {
    mount(&alice_and_bob());

    half(1, 2, Side::Minus).click();
    let input = editor_in(&half(1, 2, Side::Minus)).expect("click should open the editor");
    input.set_value("9");
    press(&input, "Escape", false);

    assert_eq!(text(&half(1, 2, Side::Minus)), "1");
    assert_eq!(text(&fixed_part(1, "total-score")), "-1");
    assert_eq!(stored(), "");
}

#[wasm_bindgen_test]
fn enter_in_a_name_ends_editing_unless_composing() {
    mount(&alice_and_bob());

    let name = fixed_part(0, "player-name");
    name.focus().unwrap();
    assert!(is_focused(&name));

    press(&name, "Enter", true);
    assert!(is_focused(&name));

    press(&name, "Enter", false);
    assert!(!is_focused(&name));
}

#[wasm_bindgen_test]
fn overlay_click_dismisses_the_reset_dialog() {
    mount(&alice_and_bob());
    let modal = element("#reset-modal");

    element("#reset-button").click();
    assert!(!modal.class_list().contains(HIDDEN_CLASS));

    element("#reset-modal .modal").click();
    assert!(!modal.class_list().contains(HIDDEN_CLASS));

    modal.click();
    assert!(modal.class_list().contains(HIDDEN_CLASS));
    assert_eq!(text(&fixed_part(0, "player-name")), "Alice");
}

#[wasm_bindgen_test]
fn scores_only_reset_keeps_names() {
    mount(&alice_and_bob());

    element("#reset-button").click();
    element("#reset-score-only").click();

    assert_eq!(text(&fixed_part(0, "player-name")), "Alice");
    assert_eq!(text(&fixed_part(1, "player-name")), "Bob");
    assert_eq!(text(&half(0, 0, Side::Plus)), "0");
    assert_eq!(text(&half(1, 2, Side::Minus)), "0");
    assert_eq!(text(&fixed_part(0, "total-score")), "0");
    assert!(element("#reset-modal").class_list().contains(HIDDEN_CLASS));
}

#[wasm_bindgen_test]
fn sync_layout_equalizes_paired_rows() {
    let document = render(&alice_and_bob());
    let mut dom = DomBoard::from_document(&document).unwrap();
    fixed_part(1, "player-name").style().set_property("height", "80px").unwrap();

    dom.sync_layout().unwrap();

    for player in 0..2 {
        let fixed = element(&format!("#fixed-scoreboard-body [data-player-id=\"{player}\"]"));
        let scrollable =
            element(&format!("#scrollable-scoreboard-body [data-player-id=\"{player}\"]"));
        assert_eq!(fixed.offset_height(), scrollable.offset_height());
    }
    assert!(element("#scrollable-scoreboard-body [data-player-id=\"1\"]").offset_height() >= 80);
    assert_eq!(
        element(".fixed-scoreboard thead tr").offset_height(),
        element(".scrollable-scoreboard thead tr").offset_height()
    );
}
