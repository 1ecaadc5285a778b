pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analyze::handlers as analyze;
use crate::ingest::handlers as ingest;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Ingestion & browsing
        .route("/api/v1/ingest", post(ingest::handle_ingest))
        .route("/api/v1/postings", get(ingest::handle_list_postings))
        .route("/api/v1/skills/demand", get(ingest::handle_skill_demand))
        // Resume analysis
        .route("/api/v1/roles", get(analyze::handle_list_roles))
        .route("/api/v1/resume/analyze", post(analyze::handle_analyze))
        .with_state(state)
}
