pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ingest::handlers as ingest;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route("/api/v1/ats-score", post(scoring::handle_ats_score))
        .route(
            "/api/v1/detailed-analysis",
            post(scoring::handle_detailed_analysis),
        )
        // Upload API
        .route(
            "/api/v1/upload",
            post(ingest::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
