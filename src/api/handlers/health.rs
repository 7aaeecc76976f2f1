use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
