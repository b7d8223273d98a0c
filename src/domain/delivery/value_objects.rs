//! Delivery Context - Value Objects

use std::str::FromStr;

use crate::domain::DomainError;

/// 包裹装车状态
///
/// 存储过程以原始文本比较，序列化时保持与数据库一致的写法。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    ToLoad,
    Loaded,
    Delivered,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToLoad => "To Load",
            Self::Loaded => "Loaded",
            Self::Delivered => "Delivered",
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "To Load" => Ok(Self::ToLoad),
            "Loaded" => Ok(Self::Loaded),
            "Delivered" => Ok(Self::Delivered),
            other => Err(DomainError::invalid(
                "status",
                format!("expected one of 'To Load', 'Loaded', 'Delivered', got '{other}'"),
            )),
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 列表返回条数（1..=500）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(i64);

impl ListLimit {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 500;
    pub const DEFAULT: i64 = 100;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::invalid(
                "top",
                format!("must be between {} and {}", Self::MIN, Self::MAX),
            ));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Default for ListLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
