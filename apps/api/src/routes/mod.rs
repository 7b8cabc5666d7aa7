pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::roadmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roadmap", get(handlers::handle_get_roadmap))
        .route(
            "/api/v1/roadmap/preview",
            post(handlers::handle_preview_roadmap),
        )
        .with_state(state)
}
