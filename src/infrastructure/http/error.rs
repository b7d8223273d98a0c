//! HTTP Error Handling
//!
//! 错误响应体统一为 `{"detail": ...}`，状态码即真实 HTTP 状态码。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: Value,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<Value>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    /// 冲突的 detail 是结构化对象
    Conflict(Value),
    Unprocessable(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                Value::String(msg)
            }
            ApiError::Unauthorized(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Unauthorized");
                Value::String(msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                Value::String(msg)
            }
            ApiError::Conflict(detail) => {
                tracing::warn!(status = status.as_u16(), detail = %detail, "Resource conflict");
                detail
            }
            ApiError::Unprocessable(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Validation failed");
                Value::String(msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
                Value::String(msg)
            }
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::BadRequest(msg) => ApiError::BadRequest(msg),
            ApplicationError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            ApplicationError::NotFound(msg) => ApiError::NotFound(msg),
            ApplicationError::Conflict { message, issues } => {
                ApiError::Conflict(json!({ "message": message, "issues": issues }))
            }
            ApplicationError::Unprocessable(msg) => ApiError::Unprocessable(msg),
            ApplicationError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApplicationError::from(e).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ProcedureError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(ApplicationError::bad_request("x")), StatusCode::BAD_REQUEST),
            (ApiError::from(ApplicationError::unauthorized("x")), StatusCode::UNAUTHORIZED),
            (ApiError::from(ApplicationError::not_found("x")), StatusCode::NOT_FOUND),
            (
                ApiError::from(DomainError::invalid("top", "out of range")),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::from(ApplicationError::from(ProcedureError::NotConfigured(
                    "Missing DB env vars.".to_string(),
                ))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected);
        }
    }

    #[test]
    fn test_conflict_detail_is_structured() {
        let err = ApiError::from(ApplicationError::Conflict {
            message: "Staged requirements not satisfied (0 issue(s))".to_string(),
            issues: Vec::new(),
        });

        match err {
            ApiError::Conflict(detail) => {
                assert_eq!(detail["issues"], json!([]));
                assert!(detail["message"].is_string());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
