//! Health Handlers
//!
//! `/healthz` 与各功能的 `/health`

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{FeatureHealthResponse, HealthResponse};
use crate::infrastructure::http::state::AppState;

/// 服务健康检查，免 API Key
pub async fn healthz(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        env: state.environment.clone(),
    })
}

fn feature(name: &'static str) -> Json<FeatureHealthResponse> {
    Json(FeatureHealthResponse {
        ok: true,
        feature: name,
    })
}

/// 免 API Key
pub async fn picking_health() -> Json<FeatureHealthResponse> {
    feature("picking")
}

pub async fn staging_health() -> Json<FeatureHealthResponse> {
    feature("staging")
}

pub async fn packing_health() -> Json<FeatureHealthResponse> {
    feature("packing")
}

pub async fn delivery_health() -> Json<FeatureHealthResponse> {
    feature("delivery")
}

pub async fn stock_health() -> Json<FeatureHealthResponse> {
    feature("stock")
}
