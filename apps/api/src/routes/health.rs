use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and whether a completion service is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let completion_service = if state.pipeline.is_available() {
        "configured"
    } else {
        "unconfigured"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "completion_service": completion_service
    }))
}
