use wasm_bindgen::JsCast;

use minigolf_core::mvu::Msg;
use minigolf_core::score::ResetChoice;
use minigolf_core::view::score::{
    CLOSE_MODAL_ID, FIXED_BODY_ID, RESET_ALL_ID, RESET_BUTTON_ID, RESET_MODAL_ID,
    RESET_SCORE_ONLY_ID, SCROLL_CONTAINER_CLASS, SCROLLABLE_BODY_ID,
};

use crate::web_document::{WebDocument, web_window};
use crate::web_element_ext::WebEventTargetExt;
use crate::web_error_handling::JsResult;
use crate::{dispatch, with_board};

fn event_element(event: &web_sys::Event) -> Option<web_sys::Element> {
    event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

fn on_click(element: &web_sys::Element, msg: impl Fn() -> Msg + 'static) -> JsResult<()> {
    let target: &web_sys::EventTarget = element.as_ref();
    target.add_event_listener_and_forget("click", move |_: web_sys::Event| {
        dispatch(msg());
        Ok(())
    })
}

fn wire_scrollable_body(document: &WebDocument) -> JsResult<()> {
    let body = document.get_existing_element_by_id(SCROLLABLE_BODY_ID)?;
    let target: &web_sys::EventTarget = body.as_ref();
    target.add_event_listener_and_forget("click", |event: web_sys::Event| {
        let Some(element) = event_element(&event) else {
            return Ok(());
        };
        // clicks inside the open editor belong to the input
        if element.tag_name().eq_ignore_ascii_case("input") {
            return Ok(());
        }
        if let Some(cell) = with_board(|board| board.locate_cell(&element))?.flatten() {
            dispatch(Msg::CellClicked(cell));
        }
        Ok(())
    })
}

fn wire_name_cells(document: &WebDocument) -> JsResult<()> {
    let body = document.get_existing_element_by_id(FIXED_BODY_ID)?;
    let target: &web_sys::EventTarget = body.as_ref();
    target.add_event_listener_and_forget("click", |event: web_sys::Event| {
        let Some(element) = event_element(&event) else {
            return Ok(());
        };
        if let Some((player, _)) = with_board(|board| board.locate_name(&element))?.flatten() {
            dispatch(Msg::NameClicked(player));
        }
        Ok(())
    })?;
    target.add_event_listener_and_forget("input", |event: web_sys::Event| {
        let Some(element) = event_element(&event) else {
            return Ok(());
        };
        if let Some((player, name)) = with_board(|board| board.locate_name(&element))?.flatten() {
            let text = name.text_content().unwrap_or_default();
            dispatch(Msg::NameEdited { player, text });
        }
        Ok(())
    })?;
    target.add_event_listener_and_forget("keydown", |event: web_sys::Event| {
        let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return Ok(());
        };
        // Enter that confirms an IME composition is not a line break.
        if key_event.is_composing() || key_event.key() != "Enter" {
            return Ok(());
        }
        let Some(element) = event_element(&event) else {
            return Ok(());
        };
        if let Some((_, name)) = with_board(|board| board.locate_name(&element))?.flatten() {
            key_event.prevent_default();
            name.blur()?;
        }
        Ok(())
    })
}

/// The dialog is only wired when both the trigger and the dialog exist.
fn wire_reset_dialog(document: &WebDocument) -> JsResult<()> {
    let (Some(button), Some(modal)) = (
        document.get_element_by_id(RESET_BUTTON_ID),
        document.get_element_by_id(RESET_MODAL_ID),
    ) else {
        return Ok(());
    };
    on_click(&button, || Msg::ResetRequested)?;
    if let Some(close) = document.get_element_by_id(CLOSE_MODAL_ID) {
        on_click(&close, || Msg::ResetChosen(ResetChoice::Dismiss))?;
    }
    if let Some(scores_only) = document.get_element_by_id(RESET_SCORE_ONLY_ID) {
        on_click(&scores_only, || Msg::ResetChosen(ResetChoice::ScoresOnly))?;
    }
    if let Some(everything) = document.get_element_by_id(RESET_ALL_ID) {
        on_click(&everything, || Msg::ResetChosen(ResetChoice::Everything))?;
    }
    let overlay = modal.clone();
    let target: &web_sys::EventTarget = modal.as_ref();
    target.add_event_listener_and_forget("click", move |event: web_sys::Event| {
        let on_backdrop = event.target().is_some_and(|target| {
            target
                .dyn_ref::<web_sys::Node>()
                .is_some_and(|node| overlay.is_same_node(Some(node)))
        });
        if on_backdrop {
            dispatch(Msg::ResetChosen(ResetChoice::Dismiss));
        }
        Ok(())
    })
}

fn wire_layout(document: &WebDocument) -> JsResult<()> {
    let window = web_window()?;
    let target: &web_sys::EventTarget = window.as_ref();
    target.add_event_listener_and_forget("resize", |_: web_sys::Event| {
        dispatch(Msg::Resized);
        Ok(())
    })?;
    if let Some(container) = document.query_selector(&format!(".{SCROLL_CONTAINER_CLASS}"))? {
        let target: &web_sys::EventTarget = container.as_ref();
        target.add_event_listener_and_forget("scroll", |_: web_sys::Event| {
            dispatch(Msg::Scrolled);
            Ok(())
        })?;
    }
    Ok(())
}

pub fn wire(document: &WebDocument) -> JsResult<()> {
    wire_scrollable_body(document)?;
    wire_name_cells(document)?;
    wire_reset_dialog(document)?;
    wire_layout(document)
}
