pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/interviews/analyze",
            post(handlers::handle_analyze),
        )
        .route(
            "/api/v1/interviews/questions",
            get(handlers::handle_get_questions),
        )
        .route("/api/v1/domains", get(handlers::handle_list_domains))
        .with_state(state)
}
