//! Request handlers. Each one maps path/body input onto a single store call.

use attest_core::entities::{Checklist, ChecklistItem};
use attest_core::ids::{ChecklistId, ItemId};
use attest_core::requests::UpdateItemStatusRequest;
use attest_core::responses::{HealthResponse, ProgressSummary};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};

use crate::AppState;
use crate::error::ApiError;

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        service: "attest".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        started_at: state.started_at.to_rfc3339(),
    })
}

pub(crate) async fn list_checklists(State(state): State<AppState>) -> Json<Vec<Checklist>> {
    Json(state.store.list_all())
}

pub(crate) async fn get_checklist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Checklist>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.store.get(ChecklistId(id))?))
}

pub(crate) async fn update_item_status(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    body: Result<Json<UpdateItemStatusRequest>, JsonRejection>,
) -> Result<Json<ChecklistItem>, ApiError> {
    let Path((id, item_id)) = path?;
    let Json(request) = body?;
    let (status, evidence) = request.into_parts()?;

    let item = state
        .store
        .update_item_status(ChecklistId(id), ItemId(item_id), status, evidence)?;
    Ok(Json(item))
}

pub(crate) async fn get_progress(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProgressSummary>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.store.get_progress(ChecklistId(id))?))
}
