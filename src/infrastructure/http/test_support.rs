//! 路由测试工具：真实 Router + FakeProcedureInvoker

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;

use super::{AppState, HttpServer, ServerConfig};
use crate::config::AppConfig;
use crate::infrastructure::adapters::{
    Argon2PasswordHasher, FakeProcedureInvoker, JwtTokenService, JwtTokenServiceConfig,
};

pub(crate) const API_KEY: &str = "test-key";

pub(crate) fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.environment = "test".to_string();
    config.security.api_key = API_KEY.to_string();
    config.security.jwt_secret = "test-secret".to_string();
    config
}

pub(crate) fn test_tokens() -> JwtTokenService {
    JwtTokenService::new(JwtTokenServiceConfig::from(&test_config().security))
}

pub(crate) fn test_app(invoker: Arc<FakeProcedureInvoker>) -> Router {
    let config = test_config();
    let state = AppState::new(
        &config,
        invoker,
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(test_tokens()),
    );
    HttpServer::new(ServerConfig::default(), state).build_router()
}

/// 带 API Key 的请求
pub(crate) fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-API-Key", API_KEY)
        .body(Body::empty())
        .unwrap()
}

pub(crate) fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-API-Key", API_KEY)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// 发送请求，返回状态码和 JSON 响应体（空响应体为 null）
pub(crate) async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    use tower::util::ServiceExt;

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}
