//! POST /receipts/process and GET /receipts/{id}/points.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Extension, Json,
};
use receipts_core::{new_receipt_id, score_breakdown, Receipt};
use serde::Serialize;
use uuid::Uuid;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct ProcessReceiptResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub(super) struct PointsResponse {
    pub points: u64,
}

pub(super) async fn process_receipt(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    // decoded regardless of Content-Type
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected malformed receipt");
        ApiError::new(
            req_id.0.clone(),
            "bad_request",
            format!("invalid receipt: {e}"),
        )
    })?;

    let breakdown = score_breakdown(&receipt);
    let points = breakdown.total();
    tracing::debug!(?breakdown, retailer = %receipt.retailer, "scored receipt");

    let id = new_receipt_id().map_err(|e| {
        tracing::error!(error = %e, "failed to generate receipt id");
        ApiError::new(
            req_id.0.clone(),
            "internal_error",
            "failed to generate receipt id",
        )
    })?;

    state.store.put(id, points);
    tracing::info!(receipt_id = %id, points, "receipt processed");

    Ok(Json(ProcessReceiptResponse { id: id.to_string() }))
}

pub(super) async fn get_points(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let id = Uuid::parse_str(&raw_id).map_err(|e| {
        tracing::warn!(receipt_id = %raw_id, error = %e, "rejected malformed receipt id");
        ApiError::new(req_id.0.clone(), "bad_request", "receipt id must be a UUID")
    })?;

    let Some(points) = state.store.get(&id) else {
        tracing::warn!(receipt_id = %id, "receipt not found");
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no receipt found for id {id}"),
        ));
    };

    Ok(Json(PointsResponse { points }))
}
