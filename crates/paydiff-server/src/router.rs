use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all paydiff endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handler::health))
        .route("/api/payloads/payload", post(handler::submit_payload))
        .route("/api/payloads/status", get(handler::status))
        .route("/api/payloads/comparison", get(handler::comparison))
        .route("/api/payloads/clear", post(handler::clear))
        .layer(TraceLayer::new_for_http())
        // The diff viewer front end is served from a different origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
