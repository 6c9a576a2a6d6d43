mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use config::Settings;
use core::{LocationResolver, SearchEngine};
use routes::search::AppState;
use services::{Catalog, ResponseCache};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Stayfinder Algo search service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the embedded property catalog
    let catalog = Catalog::load_embedded().unwrap_or_else(|e| {
        error!("Failed to load property catalog: {}", e);
        panic!("Catalog error: {}", e);
    });

    info!(
        "Catalog loaded: {} properties, {} reference locations",
        catalog.properties.len(),
        catalog.reference_locations.len()
    );

    // Build the resolution and search components
    let resolver = Arc::new(LocationResolver::new(
        catalog.reference_locations,
        settings.search.max_edit_distance,
    ));

    let engine = Arc::new(SearchEngine::new(
        Arc::new(catalog.properties),
        settings.search.radius_km,
    ));

    let cache = Arc::new(ResponseCache::new());

    info!(
        "Search engine initialized (radius: {}km, max edit distance: {})",
        settings.search.radius_km, settings.search.max_edit_distance
    );

    // Build application state
    let app_state = AppState {
        resolver,
        engine,
        cache,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
