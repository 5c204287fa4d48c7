pub mod config;
pub mod discovery;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod ollama;
pub mod prompt;
pub mod registry;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

// Assemble the gateway's routes. Anything other than POST on /api/translate
// gets 405 from the router itself.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/translate", post(handlers::translate_handler))
        .route("/api/info", get(handlers::info_handler))
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
