mod console_logger;
mod dom_board;
mod events;
mod local_storage;
mod web_document;
mod web_element_ext;
mod web_error_handling;
mod web_iterators;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;

use std::cell::RefCell;
use std::collections::VecDeque;

use log::info;
use wasm_bindgen::prelude::*;

use minigolf_core::mvu::{Deps, Msg, ScoreboardModel, run_scoreboard};

use crate::dom_board::DomBoard;
use crate::local_storage::LocalStore;
use crate::web_document::WebDocument;
use crate::web_error_handling::{JsResult, set_panic_hook};

struct App {
    model: ScoreboardModel,
    view: DomBoard,
    store: LocalStore,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    // DOM calls made while handling a message can fire events synchronously
    // (removing a focused input fires blur). Those land here and are drained
    // by whichever dispatch holds the app.
    static PENDING: RefCell<VecDeque<Msg>> = const { RefCell::new(VecDeque::new()) };
}

/// Queues `msg` and runs the update loop unless it is already running.
pub(crate) fn dispatch(msg: Msg) {
    PENDING.with_borrow_mut(|pending| pending.push_back(msg));
    APP.with(|cell| {
        let Ok(mut guard) = cell.try_borrow_mut() else {
            return;
        };
        let Some(app) = guard.as_mut() else {
            return;
        };
        while let Some(msg) = PENDING.with_borrow_mut(VecDeque::pop_front) {
            let mut deps = Deps {
                view: &mut app.view,
                store: &mut app.store,
            };
            // failures are logged by `update` when it records them
            let _ = run_scoreboard(&mut app.model, msg, &mut deps);
        }
    });
}

/// Runs `f` against the mounted board. `None` while the board is busy or not mounted.
pub(crate) fn with_board<R>(f: impl FnOnce(&DomBoard) -> JsResult<R>) -> JsResult<Option<R>> {
    APP.with(|cell| match cell.try_borrow() {
        Ok(guard) => guard.as_ref().map(|app| f(&app.view)).transpose(),
        Err(_) => Ok(None),
    })
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> JsResult<()> {
    set_panic_hook();
    console_logger::init(log::LevelFilter::Info);
    mount(&web_document::web_document()?)
}

/// Takes over the scoreboard already rendered into `document`.
fn mount(document: &WebDocument) -> JsResult<()> {
    let view = DomBoard::from_document(document)?;
    let board = view.read_board()?;
    let placeholder = view.placeholder();
    info!(
        "scoreboard mounted: {} players, {} holes",
        board.players.len(),
        board.hole_count()
    );
    let model = ScoreboardModel::new(board, placeholder);
    APP.with_borrow_mut(|app| {
        *app = Some(App {
            model,
            view,
            store: LocalStore::open(),
        });
    });

    events::wire(document)?;
    dispatch(Msg::PageLoad);
    Ok(())
}
