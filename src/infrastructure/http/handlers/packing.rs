//! Packing Handlers
//!
//! 同一操作同时提供路径参数和 query 参数两种形式，后者是移动端使用的写法

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{
    AddPackItem, ClearPackage, GetPackageItems, GetPackageSummary, ResultSet, Row, SealPackage,
    StartOrSetPackage, UndoLastPackItem, ValidatePackage,
};
use crate::infrastructure::http::dto::{ItemsResponse, ValidationResponseDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

fn default_qty() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartOrSetParams {
    pub package_number: Option<String>,
}

pub async fn start_or_set_package(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StartOrSetParams>,
) -> Result<Json<Row>, ApiError> {
    let package = state
        .packing_handler
        .start_or_set(StartOrSetPackage {
            package_number: params.package_number,
        })
        .await?;

    Ok(Json(package))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemParams {
    pub packing_id: i64,
    pub barcode_or_serial: String,
    #[serde(default = "default_qty")]
    pub qty: i64,
}

pub async fn add_pack_item(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddItemParams>,
) -> Result<Json<Row>, ApiError> {
    let item = state
        .packing_handler
        .add_item(AddPackItem {
            packing_id: params.packing_id,
            barcode_or_serial: params.barcode_or_serial,
            qty: params.qty,
        })
        .await?;

    Ok(Json(item))
}

// ============================================================================
// 路径参数形式
// ============================================================================

pub async fn package_items(
    State(state): State<Arc<AppState>>,
    Path(packing_id): Path<i64>,
) -> Result<Json<ItemsResponse<Row>>, ApiError> {
    let items = state
        .packing_query_handler
        .items(GetPackageItems { packing_id })
        .await?;

    Ok(Json(ItemsResponse::new(items)))
}

pub async fn undo_last_pack_item(
    State(state): State<Arc<AppState>>,
    Path(packing_id): Path<i64>,
) -> Result<Json<Row>, ApiError> {
    let result = state
        .packing_handler
        .undo_last(UndoLastPackItem { packing_id })
        .await?;

    Ok(Json(result))
}

pub async fn clear_package(
    State(state): State<Arc<AppState>>,
    Path(packing_id): Path<i64>,
) -> Result<Json<Row>, ApiError> {
    let result = state
        .packing_handler
        .clear(ClearPackage { packing_id })
        .await?;

    Ok(Json(result))
}

pub async fn seal_package(
    State(state): State<Arc<AppState>>,
    Path(packing_id): Path<i64>,
) -> Result<Json<Row>, ApiError> {
    let sealed = state
        .packing_handler
        .seal(SealPackage { packing_id })
        .await?;

    Ok(Json(sealed))
}

pub async fn package_summary(
    State(state): State<Arc<AppState>>,
    Path(packing_id): Path<i64>,
) -> Result<Json<Row>, ApiError> {
    let summary = state
        .packing_query_handler
        .summary(GetPackageSummary { packing_id })
        .await?;

    Ok(Json(summary))
}

// ============================================================================
// query 参数形式
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingIdParams {
    pub packing_id: i64,
}

/// 返回裸数组
pub async fn package_items_by_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PackingIdParams>,
) -> Result<Json<ResultSet>, ApiError> {
    let items = state
        .packing_query_handler
        .items(GetPackageItems {
            packing_id: params.packing_id,
        })
        .await?;

    Ok(Json(items))
}

pub async fn validate_package(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PackingIdParams>,
) -> Result<Json<ValidationResponseDto>, ApiError> {
    let report = state
        .packing_query_handler
        .validate(ValidatePackage {
            packing_id: params.packing_id,
        })
        .await?;

    Ok(Json(ValidationResponseDto {
        ok: report.is_ok(),
        issues: report.issues,
    }))
}

pub async fn undo_last_pack_item_by_query(
    state: State<Arc<AppState>>,
    Query(params): Query<PackingIdParams>,
) -> Result<Json<Row>, ApiError> {
    undo_last_pack_item(state, Path(params.packing_id)).await
}

pub async fn clear_package_by_query(
    state: State<Arc<AppState>>,
    Query(params): Query<PackingIdParams>,
) -> Result<Json<Row>, ApiError> {
    clear_package(state, Path(params.packing_id)).await
}

pub async fn seal_package_by_query(
    state: State<Arc<AppState>>,
    Query(params): Query<PackingIdParams>,
) -> Result<Json<Row>, ApiError> {
    seal_package(state, Path(params.packing_id)).await
}
