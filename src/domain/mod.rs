//! Domain Layer - 领域层
//!
//! 业务规则全部在数据库存储过程中，这里只保留请求参数的值对象校验
//! 和返回给移动端的固定结构：
//! - User Context: 注册 / 登录参数
//! - Picking Context: 拣货会话、扫描记录
//! - Delivery Context: 装车状态、列表上限
//! - Stock Context: 盘点数量

pub mod delivery;
pub mod picking;
pub mod stock;
pub mod user;

use thiserror::Error;

/// 领域层校验错误（映射为 HTTP 422）
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}
