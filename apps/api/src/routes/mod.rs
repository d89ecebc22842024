pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers;
use crate::resume::handlers::handle_upload_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommendations),
        )
        .route("/api/v1/feedback", post(handlers::handle_feedback))
        .route("/api/v1/resume", post(handle_upload_resume))
        .with_state(state)
}
