//! Data Transfer Objects
//!
//! 响应体直接是 JSON 对象，没有统一包装。字段名与移动端约定一致。

use serde::Serialize;

use crate::application::{AuthenticatedUser, ResultSet, Row};
use serde_json::Value;

// ============================================================================
// 通用
// ============================================================================

/// `{"items": [...]}`
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub items: Vec<T>,
}

impl<T: Serialize> ItemsResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

// ============================================================================
// Health DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub env: String,
}

#[derive(Debug, Serialize)]
pub struct FeatureHealthResponse {
    pub ok: bool,
    pub feature: &'static str,
}

// ============================================================================
// Auth DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RegisterResponseDto {
    pub ok: bool,
    pub user: Row,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDto {
    pub user_id: Value,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<AuthenticatedUser> for UserDto {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            role: user.role.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponseDto {
    pub ok: bool,
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserDto,
}

// ============================================================================
// Picking / Packing DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CompletePickResponseDto {
    pub ok: bool,
    pub summary: ResultSet,
}

#[derive(Debug, Serialize)]
pub struct ValidationResponseDto {
    pub ok: bool,
    pub issues: ResultSet,
}

// ============================================================================
// Delivery / Stock DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DeliveryListResponseDto {
    pub items: ResultSet,
    pub counts: Row,
}

#[derive(Debug, Serialize)]
pub struct StockFinishResponseDto {
    pub header: Row,
    pub totals: Row,
    pub discrepancies: ResultSet,
}

// ============================================================================
// Diagnostics DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DbPingResponseDto {
    pub ok: bool,
    pub sample_db: Option<String>,
}
