pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route("/api/v1/questions", get(handlers::handle_get_questions))
        .route("/api/v1/assessments", post(handlers::handle_submit))
        .route(
            "/api/v1/assessments/match",
            post(handlers::handle_submit_match),
        )
        .with_state(state)
}
