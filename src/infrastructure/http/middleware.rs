//! HTTP Middleware
//!
//! - API Key 校验
//! - HTTP 状态码错误日志

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use super::error::ApiError;

/// API Key 校验配置
#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    header: String,
    key: String,
}

impl ApiKeyGate {
    pub fn new(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: key.into(),
        }
    }

    /// 未配置 key 时拒绝所有请求
    pub fn allows(&self, provided: Option<&[u8]>) -> bool {
        if self.key.is_empty() {
            return false;
        }
        match provided {
            Some(provided) => provided.ct_eq(self.key.as_bytes()).into(),
            None => false,
        }
    }
}

/// API Key 中间件
///
/// 以 `route_layer` 挂载，只作用于受保护路由
pub async fn require_api_key(
    State(gate): State<ApiKeyGate>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(gate.header.as_str())
        .map(|value| value.as_bytes());

    if !gate.allows(provided) {
        return ApiError::Unauthorized("Unauthorized".to_string()).into_response();
    }

    next.run(request).await
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
/// 注意：带 detail 的业务错误已在 ApiError::into_response() 中记录一次
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
