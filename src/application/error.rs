//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{ProcedureError, ResultSet, SecurityError};
use crate::domain::DomainError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 存储过程未返回预期结果
    #[error("{0}")]
    BadRequest(String),

    /// 凭据无效
    #[error("{0}")]
    Unauthorized(String),

    /// 资源未找到
    #[error("{0}")]
    NotFound(String),

    /// 状态冲突，附带存储过程返回的问题清单
    #[error("{message}")]
    Conflict { message: String, issues: ResultSet },

    /// 参数校验失败
    #[error("{0}")]
    Unprocessable(String),

    /// 存储过程调用或结果整理失败
    #[error("{0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<ProcedureError> for ApplicationError {
    fn from(err: ProcedureError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<SecurityError> for ApplicationError {
    fn from(err: SecurityError) -> Self {
        match err {
            SecurityError::TokenExpired | SecurityError::InvalidToken => {
                Self::Unauthorized(err.to_string())
            }
            SecurityError::HashingFailed | SecurityError::TokenGenerationFailed => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        Self::Unprocessable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_settings_surface_verbatim() {
        let err = ApplicationError::from(ProcedureError::NotConfigured(
            "Missing DB env vars.".to_string(),
        ));
        assert!(matches!(err, ApplicationError::Internal(ref m) if m == "Missing DB env vars."));
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        assert!(matches!(
            ApplicationError::from(SecurityError::TokenExpired),
            ApplicationError::Unauthorized(_)
        ));
        assert!(matches!(
            ApplicationError::from(SecurityError::HashingFailed),
            ApplicationError::Internal(_)
        ));
    }
}
