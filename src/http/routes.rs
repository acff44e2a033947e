//! API route handlers

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
};

use super::dto::{HealthResponse, PointsResponse, ProcessReceiptResponse};
use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::{parse_receipt_json, score};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
}

/// Score a receipt and store the result.
///
/// The body is taken as raw bytes so that a missing or unexpected
/// `Content-Type` is judged on the body alone.
pub async fn process_receipt(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<ProcessReceiptResponse>> {
    let receipt = parse_receipt_json(&body)?;

    let result = score(&receipt);
    let points = result.points;
    let breakdown = result.lines();

    let id = state.store.put(receipt, result)?;

    tracing::info!(%id, points, ?breakdown, "receipt processed");

    Ok(Json(ProcessReceiptResponse { id }))
}

/// Get the points awarded to a stored receipt
pub async fn get_points(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<PointsResponse>> {
    let points = state.store.points(&id)?.ok_or_else(|| ApiError::NotFound(format!("Receipt {} not found", id)))?;

    Ok(Json(PointsResponse { points }))
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy".to_string(), version: state.version.clone() })
}
