//! Trace-producing handlers.
//!
//! Executors are CPU-bound and their traces can be large, so each run is moved
//! onto `spawn_blocking`. Body extraction failures (malformed JSON, wrong field
//! types) are turned into `BAD_REQUEST` through `From<JsonRejection>`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::traces::{
    BubbleSortRequest, BubbleSortResponse, LinearSearchRequest, LinearSearchResponse,
    NQueensRequest, NQueensResponse,
};
use crate::service;
use crate::state::AppState;

async fn run_blocking<T, F>(job: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ApiError::InternalError(format!("trace task failed: {}", e)))?
}

/// Traces a linear search.
///
/// `POST /linear-search`
pub async fn linear_search(
    State(state): State<AppState>,
    body: Result<Json<LinearSearchRequest>, JsonRejection>,
) -> Result<Json<LinearSearchResponse>, ApiError> {
    let Json(req) = body?;
    let limits = state.limits;
    let response = run_blocking(move || service::run_linear_search(req, &limits)).await?;
    Ok(Json(response))
}

/// Traces a bubble sort.
///
/// `POST /api/bubble-sort`
pub async fn bubble_sort(
    State(state): State<AppState>,
    body: Result<Json<BubbleSortRequest>, JsonRejection>,
) -> Result<Json<BubbleSortResponse>, ApiError> {
    let Json(req) = body?;
    let limits = state.limits;
    let response = run_blocking(move || service::run_bubble_sort(req, &limits)).await?;
    Ok(Json(response))
}

/// Traces the N-Queens backtracking search.
///
/// `POST /n-queens`
pub async fn n_queens(
    State(state): State<AppState>,
    body: Result<Json<NQueensRequest>, JsonRejection>,
) -> Result<Json<NQueensResponse>, ApiError> {
    let Json(req) = body?;
    let limits = state.limits;
    let response = run_blocking(move || service::run_n_queens(req, &limits)).await?;
    Ok(Json(response))
}
