//! Router assembly for the algoviz HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Paths are the ones the visualization client already calls, so the
/// search, sort and N-Queens routes do not share a prefix.
/// CORS is permissive (the client is served from a different origin).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Traces
        .route("/linear-search", post(handlers::traces::linear_search))
        .route("/api/bubble-sort", post(handlers::traces::bubble_sort))
        .route("/n-queens", post(handlers::traces::n_queens))
        // Metadata
        .route("/api/algorithms", get(handlers::algorithms::list_algorithms))
        .route(
            "/api/algorithms/{key}",
            get(handlers::algorithms::get_algorithm),
        )
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
