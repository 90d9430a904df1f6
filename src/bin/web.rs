//! Single binary web server: generates tournaments via REST.
//! Run with: TEAMS_CATALOG_PATH=teams.csv cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Other env: HTTP_HEADER_ACCESS_CONTROL_ALLOW_ORIGIN (default `*`), TEAMS_MIN_RATING (default 3).

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use std::sync::Arc;
use tourney_allocator::web::{allow_origin_headers, routes, AppState, SharedCatalog};
use tourney_allocator::{Config, InMemoryCatalog};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let catalog = InMemoryCatalog::from_path(&config.catalog_path).map_err(|e| {
        log::error!("loading team catalog failed: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    log::info!(
        "Loaded {} teams from {}",
        catalog.len(),
        config.catalog_path.display()
    );
    let catalog: SharedCatalog = Arc::new(catalog);

    let state = Data::new(AppState::new(catalog, config.min_rating));

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let allow_origin = config.allow_origin.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(allow_origin_headers(&allow_origin))
            .wrap(Logger::default())
            .configure(routes)
    })
    .bind(bind)?
    .run()
    .await
}
