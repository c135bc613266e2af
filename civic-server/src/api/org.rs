//! Organization handlers
//!
//! Login is advisory: no token or session is issued, and the other org
//! routes do not check one.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::{Complaint, OrgLoginRequest, OrgLoginResponse, StatusUpdateRequest};

use crate::error::{AppResult, ServerError};
use crate::state::AppState;

/// POST /api/v1/org/login - 组织登录 (mock)
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<OrgLoginRequest>,
) -> AppResult<Json<OrgLoginResponse>> {
    if state.store.authenticate(&req.org_id, &req.password).is_none() {
        tracing::warn!(org_id = %req.org_id, "Organization login failed");
        return Err(ServerError::Unauthorized);
    }

    tracing::info!(org_id = %req.org_id, "Organization logged in");
    Ok(Json(OrgLoginResponse {
        message: "Login successful".to_string(),
        org_id: req.org_id,
    }))
}

/// GET /api/v1/org/complaints/{org_id} - 组织可见投诉，按优先级降序
pub async fn list_complaints(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
) -> Json<Vec<Complaint>> {
    Json(state.store.list_by_organization(&org_id))
}

/// PUT /api/v1/org/status/update - 更新投诉状态
pub async fn update_status(
    State(state): State<AppState>,
    Json(req): Json<StatusUpdateRequest>,
) -> AppResult<Json<Complaint>> {
    if !req.has_required_fields() {
        return Err(ServerError::BadRequest);
    }
    state
        .store
        .update_status(&req.id, &req.status)
        .map(Json)
        .ok_or(ServerError::NotFound)
}
