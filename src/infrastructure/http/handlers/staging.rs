//! Staging Handlers - 拣货到打包的交接

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{
    ClaimNextStaging, ConsumeStaging, GetStagedLines, ReleaseStaging, ResultSet, Row,
    StageFromPick,
};
use crate::infrastructure::http::dto::ItemsResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn stage_from_pick(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<i64>,
) -> Result<Json<Row>, ApiError> {
    let staged = state
        .staging_handler
        .stage_from_pick(StageFromPick { session_id })
        .await?;

    Ok(Json(staged))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimNextParams {
    pub packed_by: i64,
    pub package_number: Option<String>,
}

pub async fn claim_next_staging(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClaimNextParams>,
) -> Result<Json<Row>, ApiError> {
    let claimed = state
        .staging_handler
        .claim_next(ClaimNextStaging {
            packed_by: params.packed_by,
            package_number: params.package_number,
        })
        .await?;

    Ok(Json(claimed))
}

/// 返回裸数组
pub async fn staged_lines(
    State(state): State<Arc<AppState>>,
    Path(staging_id): Path<i64>,
) -> Result<Json<ResultSet>, ApiError> {
    let lines = state
        .get_staged_lines_handler
        .handle(GetStagedLines { staging_id })
        .await?;

    Ok(Json(lines))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagingParams {
    pub staging_id: i64,
}

pub async fn consume_staging(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StagingParams>,
) -> Result<Json<ItemsResponse<Row>>, ApiError> {
    let items = state
        .staging_handler
        .consume(ConsumeStaging {
            staging_id: params.staging_id,
        })
        .await?;

    Ok(Json(ItemsResponse::new(items)))
}

pub async fn release_staging(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StagingParams>,
) -> Result<Json<Row>, ApiError> {
    let released = state
        .staging_handler
        .release(ReleaseStaging {
            staging_id: params.staging_id,
        })
        .await?;

    Ok(Json(released))
}
