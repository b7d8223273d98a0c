//! Auth Queries

/// 解析 Bearer 令牌
#[derive(Debug, Clone)]
pub struct GetCurrentUser {
    pub token: String,
}
