mod config;
mod errors;
mod services;
mod state;
mod storage;

use crate::config::AppConfig;
use crate::state::AppState;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let url = config.url();

    let state = AppState::new(config);
    state
        .ratings
        .init()
        .map_err(|e| io::Error::other(format!("Could not initialise ratings database: {}", e)))?;
    info!("Ratings database at {}", state.ratings.path().display());
    info!(
        "Solutions read from {}",
        state.config.solutions_dir.display()
    );
    for language in &state.config.languages {
        let dir = state.config.language_dir(language);
        if !dir.is_dir() {
            warn!("{} directory {} does not exist", language.name, dir.display());
        }
    }

    if state.config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let bind = (state.config.host.clone(), state.config.port);
    let state = web::Data::new(state);

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(services::json_config())
            .app_data(state.clone())
            .service(services::languages::configure_routes())
            .service(services::solutions::configure_routes())
            .service(services::ratings::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind)?
        .run()
        .await
}
