pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Room for the job description and multipart framing on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes().saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/healthCheck", get(health::health_check_handler))
        .route("/api/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
