//! User Context - Value Objects

use crate::domain::DomainError;

/// 邮箱地址
///
/// 只做结构校验：一个 `@`，本地部分非空，域名含点且各段非空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let value = raw.trim();

        let invalid = || DomainError::invalid("email", "value is not a valid email address");

        if value.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
            return Err(invalid());
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 用户角色
///
/// Users 表可能没有 Role 列，缺失时默认为 "User"。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRole(String);

impl UserRole {
    pub const DEFAULT: &'static str = "User";

    pub fn from_column(value: Option<&str>) -> Self {
        match value {
            Some(role) if !role.is_empty() => Self(role.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}
