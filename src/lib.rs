pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
}

// Builds the full application router: banner and health check at the root,
// the API nested under /api, tracing, CORS and hardening headers on top.
pub fn app(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(|| async { "EventBook API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(config::cors::cors_layer(&state.config.cors));

    config::security::apply_security_headers(router)
}
