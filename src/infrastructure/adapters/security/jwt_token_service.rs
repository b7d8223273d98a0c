//! JWT Token Service
//!
//! HS256 会话令牌的签发与校验，校验无需访问数据库

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::application::ports::{SecurityError, SessionClaims, TokenServicePort, TokenSubject};
use crate::config::SecurityConfig;

/// 已注册声明，附加声明不能覆盖
const REGISTERED_CLAIMS: &[&str] = &["sub", "email", "name", "role", "iss", "aud", "iat", "exp"];

/// JWT 配置
#[derive(Debug, Clone)]
pub struct JwtTokenServiceConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expire_minutes: i64,
}

impl From<&SecurityConfig> for JwtTokenServiceConfig {
    fn from(config: &SecurityConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            expire_minutes: config.jwt_expire_minutes,
        }
    }
}

/// JWT Token Service
#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtTokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(config: JwtTokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenServicePort for JwtTokenService {
    fn issue(
        &self,
        subject: &TokenSubject,
        expires_minutes: Option<i64>,
        extra: Option<Map<String, Value>>,
    ) -> Result<String, SecurityError> {
        let now = Utc::now();
        let ttl = expires_minutes
            .filter(|m| *m > 0)
            .unwrap_or(self.config.expire_minutes);
        let exp = now + Duration::minutes(ttl);

        let mut extra = extra.unwrap_or_default();
        extra.retain(|key, _| !REGISTERED_CLAIMS.contains(&key.as_str()));

        let claims = SessionClaims {
            sub: subject.user_id.clone(),
            email: subject.email.clone(),
            name: subject.name.clone(),
            role: subject.role.clone(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            extra,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| SecurityError::TokenGenerationFailed)
    }

    fn decode(&self, token: &str) -> Result<SessionClaims, SecurityError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => SecurityError::TokenExpired,
                _ => SecurityError::InvalidToken,
            }
        })?;

        Ok(data.claims)
    }
}
