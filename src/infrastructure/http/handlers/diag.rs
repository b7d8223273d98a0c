//! Diagnostics Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::PingDatabase;
use crate::infrastructure::http::dto::DbPingResponseDto;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 数据库连通性探测，失败时返回 500 和错误原文
pub async fn db_ping(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DbPingResponseDto>, ApiError> {
    let sample_db = state.ping_database_handler.handle(PingDatabase).await?;

    Ok(Json(DbPingResponseDto {
        ok: true,
        sample_db,
    }))
}
