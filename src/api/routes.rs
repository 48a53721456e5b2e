//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Question answering
        .route("/ask", post(handlers::ask))
        .route("/ask/batch", post(handlers::ask_batch))
        // Search
        .route("/search", post(handlers::search))
        // Sections
        .route("/sections", get(handlers::sections))
        .with_state(state)
}
