//! Wisdom endpoint handlers
//!
//! Each handler is one stateless cycle against the remote store. Upstream
//! failures are logged here and mapped to a fixed per-endpoint message; the
//! caller never sees the underlying cause.

use axum::extract::State;
use axum::Json;
use rand::seq::SliceRandom;
use wisdom_types::{
    normalize_author, validate_wisdom, CountResponse, SubmitRequest, SubmitResponse, WisdomRecord,
    COUNT_UNIT,
};

use crate::error::ApiError;
use crate::AppState;

/// GET /wisdom/random
///
/// An empty store is not an error: Gerald always has one saying in reserve.
pub async fn random(State(state): State<AppState>) -> Result<Json<WisdomRecord>, ApiError> {
    let records = state.store.approved().await.map_err(|e| {
        tracing::error!("Failed to fetch wisdom: {}", e);
        ApiError::Upstream("Gerald is napping. Try again.")
    })?;

    let record = records
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(WisdomRecord::fallback);

    Ok(Json(record))
}

/// GET /wisdom/all
pub async fn all(State(state): State<AppState>) -> Result<Json<Vec<WisdomRecord>>, ApiError> {
    let records = state.store.approved_newest_first().await.map_err(|e| {
        tracing::error!("Failed to list wisdom: {}", e);
        ApiError::Upstream("Gerald knocked over the database.")
    })?;

    Ok(Json(records))
}

/// POST /wisdom/submit
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    validate_wisdom(&req.wisdom)?;
    let author = normalize_author(req.author.as_deref());

    let record = state.store.insert(&req.wisdom, &author).await.map_err(|e| {
        tracing::error!("Failed to store submission: {}", e);
        ApiError::Upstream("Gerald ate your submission. Try again.")
    })?;

    Ok(Json(SubmitResponse {
        message: "✅ Gerald approves. Your wisdom joins the wheel.".to_string(),
        data: record,
    }))
}

/// GET /wisdom/count
///
/// A missing count header degrades to `"?"` inside the store client; only
/// transport failures reach the error path here.
pub async fn count(State(state): State<AppState>) -> Result<Json<CountResponse>, ApiError> {
    let count = state.store.approved_count().await.map_err(|e| {
        tracing::error!("Failed to count wisdom: {}", e);
        ApiError::Upstream("Gerald lost count. Try again.")
    })?;

    Ok(Json(CountResponse {
        count,
        unit: COUNT_UNIT.to_string(),
    }))
}
