//! 健康检查

use axum::{Json, response::IntoResponse};

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
