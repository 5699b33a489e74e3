use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resumatch-api"
    }))
}

/// GET /api/v1/healthCheck
/// Liveness probe in the shape the dashboard polls.
pub async fn health_check_handler() -> Json<Value> {
    Json(json!({
        "Message": "Server is running",
        "Status": "OK",
        "Version": env!("CARGO_PKG_VERSION"),
        "Timestamp": Utc::now().to_rfc3339()
    }))
}
