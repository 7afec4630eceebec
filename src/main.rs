//! BrickHunt Backend
//!
//! A REST backend for the BrickHunt LEGO inventory tracker, with SQLite
//! persistence and server-side Rebrickable catalog access.

mod api;
mod capture;
mod catalog;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{any, delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog::CatalogClient;
use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub catalog: Arc<CatalogClient>,
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BrickHunt Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Catalog URL: {}", config.rebrickable_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if the catalog key is not configured
    if config.rebrickable_api_key.is_none() {
        tracing::warn!("No Rebrickable API key configured (REBRICKABLE_API_KEY). Catalog requests will be unauthenticated!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Initialize catalog client
    let catalog = Arc::new(CatalogClient::new(
        config.rebrickable_url.clone(),
        config.rebrickable_api_key.clone(),
    ));

    // Create application state
    let state = AppState {
        repo,
        catalog,
        http: reqwest::Client::new(),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Lists
        .route("/lists", get(api::list_lists))
        .route("/lists", post(api::create_list))
        .route("/lists/{id}", get(api::get_list))
        .route("/lists/{id}", delete(api::delete_list))
        // Items
        .route("/lists/{id}/items", post(api::add_item))
        .route("/lists/{id}/items/{item_id}/found", put(api::update_found))
        .route("/lists/{id}/items/{item_id}", delete(api::remove_item))
        .route("/lists/{id}/import", post(api::import_set))
        // Catalog
        .route("/sets/{set_num}", get(api::get_set))
        .route("/sets/{set_num}/parts", get(api::get_set_parts))
        .route("/parts", get(api::search_parts))
        .route("/parts/{part_num}", get(api::get_part))
        // Capture
        .route("/capture/ocr", post(api::capture_ocr))
        .route("/capture/ocr/resolve", post(api::capture_ocr_resolve))
        .route("/capture/qr", post(api::capture_qr))
        // Key-injecting passthrough to the upstream catalog
        .route("/rebrickable/{*path}", any(api::proxy_rebrickable));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
