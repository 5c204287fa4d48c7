use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

// Reports the detected model so the frontend can display it. Empty string
// until discovery publishes.
pub async fn info_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "model": state.registry.get().unwrap_or("")
    }))
}
