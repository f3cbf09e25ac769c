use axum::{response::IntoResponse, Json};
use serde_json::json;

/// GET /health - liveness probe
pub async fn health() -> impl IntoResponse {
    let now = chrono::Utc::now();

    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": now
        }
    }))
}
