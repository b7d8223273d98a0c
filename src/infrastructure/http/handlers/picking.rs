//! Picking Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{AddPickScan, CompletePick, GetRecentScans, StartPickSession};
use crate::domain::picking::{PickingSession, ScanItem, DEFAULT_RECENT_SCANS};
use crate::infrastructure::http::dto::{CompletePickResponseDto, ItemsResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

fn default_qty() -> i64 {
    1
}

fn default_top() -> i64 {
    DEFAULT_RECENT_SCANS
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPickParams {
    pub user_id: i64,
}

pub async fn start_pick_session(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StartPickParams>,
) -> Result<Json<PickingSession>, ApiError> {
    let session = state
        .start_pick_session_handler
        .handle(StartPickSession {
            user_id: params.user_id,
        })
        .await?;

    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddScanParams {
    pub session_id: i64,
    pub barcode_or_serial: String,
    #[serde(default = "default_qty")]
    pub qty: i64,
}

pub async fn add_pick_scan(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddScanParams>,
) -> Result<Json<ScanItem>, ApiError> {
    let item = state
        .add_pick_scan_handler
        .handle(AddPickScan {
            session_id: params.session_id,
            barcode_or_serial: params.barcode_or_serial,
            qty: params.qty,
        })
        .await?;

    Ok(Json(item))
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    #[serde(default = "default_top")]
    pub top: i64,
}

pub async fn recent_scans(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<i64>,
    Query(params): Query<RecentParams>,
) -> Result<Json<ItemsResponse<ScanItem>>, ApiError> {
    let items = state
        .get_recent_scans_handler
        .handle(GetRecentScans {
            session_id,
            top: params.top,
        })
        .await?;

    Ok(Json(ItemsResponse::new(items)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletePickParams {
    pub session_id: i64,
}

pub async fn complete_pick(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompletePickParams>,
) -> Result<Json<CompletePickResponseDto>, ApiError> {
    let summary = state
        .complete_pick_handler
        .handle(CompletePick {
            session_id: params.session_id,
        })
        .await?;

    Ok(Json(CompletePickResponseDto { ok: true, summary }))
}
