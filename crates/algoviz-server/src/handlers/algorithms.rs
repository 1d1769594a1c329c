//! Algorithm metadata handlers.

use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::schema::algorithms::{AlgorithmListResponse, AlgorithmView};
use crate::state::AppState;

/// Lists all active algorithms.
///
/// `GET /api/algorithms`
pub async fn list_algorithms(
    State(state): State<AppState>,
) -> Result<Json<AlgorithmListResponse>, ApiError> {
    let catalog = state.catalog.lock().await;
    let algorithms = catalog
        .list_algorithms()?
        .into_iter()
        .map(AlgorithmView::from)
        .collect();
    Ok(Json(AlgorithmListResponse { algorithms }))
}

/// Looks up one algorithm by key.
///
/// `GET /api/algorithms/{key}`
pub async fn get_algorithm(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<AlgorithmView>, ApiError> {
    let catalog = state.catalog.lock().await;
    let record = catalog.get_algorithm(&key)?;
    Ok(Json(AlgorithmView::from(record)))
}
