use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use log::info;

use minigolf_actix::args;
use minigolf_actix::controller::board::routes;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks()?;
    let args_for_web = args.clone();
    let static_dir = args.static_dir.clone();

    info!(
        "serving a {}x{} board on {}:{} (static files from {})",
        args.board.players,
        args.board.holes,
        args.bind,
        args.port,
        static_dir.display()
    );
    if !static_dir.is_dir() {
        log::warn!(
            "static directory {} does not exist; the page will load without its script",
            static_dir.display()
        );
    }

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(args_for_web.clone()))
            .configure(routes)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
