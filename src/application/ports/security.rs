//! Security Ports - 密码哈希与会话令牌
//!
//! 密码学原语由 infrastructure/adapters/security 实现

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// 安全相关错误
#[derive(Debug, Error)]
pub enum SecurityError {
    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,
}

/// 签发令牌所需的用户信息
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// 会话令牌声明
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    /// 调用方附加的自定义声明
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Password Hasher Port
pub trait PasswordHasherPort: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, SecurityError>;

    /// 哈希格式错误时同样返回 false
    fn verify(&self, password: &str, password_hash: &str) -> bool;
}

/// Token Service Port
pub trait TokenServicePort: Send + Sync {
    /// 签发令牌；`expires_minutes` 为空时使用配置的有效期
    fn issue(
        &self,
        subject: &TokenSubject,
        expires_minutes: Option<i64>,
        extra: Option<Map<String, Value>>,
    ) -> Result<String, SecurityError>;

    /// 校验签名、过期时间、签发方与受众
    fn decode(&self, token: &str) -> Result<SessionClaims, SecurityError>;
}
