//! Security Adapter - 密码哈希（Argon2）与会话令牌（HS256 JWT）

mod argon2_hasher;
mod jwt_token_service;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt_token_service::{JwtTokenService, JwtTokenServiceConfig};
