//! Citizen complaint handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::{Complaint, ComplaintSubmission};

use crate::error::{AppResult, ServerError};
use crate::state::AppState;

/// POST /api/v1/complaints/submit - 提交投诉
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<ComplaintSubmission>,
) -> AppResult<(StatusCode, Json<Complaint>)> {
    if !payload.has_required_fields() {
        tracing::debug!("Rejected submission without title or location");
        return Err(ServerError::BadRequest);
    }
    let complaint = state.store.submit(&payload)?;
    Ok((StatusCode::CREATED, Json(complaint)))
}

/// GET /api/v1/complaints/all - 全部投诉，最新在前
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Complaint>> {
    Json(state.store.list_all())
}
