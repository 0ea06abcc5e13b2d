use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use log::warn;
use serde_json::json;
use std::collections::HashMap;

use minigolf_core::model::{Scoreboard, Snapshot};
use minigolf_core::score::{BoardRequest, apply_snapshot, parse_board_request};
use minigolf_core::view::index::render_index_template;

use crate::args::CleanArgs;

/// The server-rendered starting point: a blank board, optionally pre-filled
/// from the seed snapshot.
#[must_use]
pub fn initial_board(request: &BoardRequest, seed: Option<&Snapshot>) -> Scoreboard {
    let mut board = Scoreboard::blank(request.players, request.holes, &request.placeholder);
    if let Some(seed) = seed {
        apply_snapshot(&mut board, seed);
    }
    board
}

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    args: Data<CleanArgs>,
) -> impl Responder {
    let request = match parse_board_request(&query, &args.board) {
        Ok(request) => request,
        Err(e) => {
            warn!("rejected board request {:?}: {e}", query.0);
            return HttpResponse::BadRequest().json(json!({"error": e.to_string()}));
        }
    };

    let board = initial_board(&request, args.seed.as_ref());
    let markup = render_index_template(&args.title, &board, &request.placeholder);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Routes shared by the binary and the tests; static files are mounted separately.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health));
}
