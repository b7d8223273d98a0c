//! Procedure Invoker Port - 存储过程调用抽象
//!
//! 所有业务逻辑都在数据库存储过程中，应用层只负责传参和整理结果集。
//! 具体实现在 infrastructure/persistence 层。

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// 单行结果：列名 → JSON 值（保持列顺序）
pub type Row = Map<String, Value>;

/// 单个结果集
pub type ResultSet = Vec<Row>;

/// 存储过程调用错误
#[derive(Debug, Error)]
pub enum ProcedureError {
    /// 连接参数缺失
    #[error("{0}")]
    NotConfigured(String),

    #[error("Invalid procedure name: {0}")]
    InvalidName(String),

    #[error("Database error: {0}")]
    Database(String),

    /// 列值无法转换为 JSON
    #[error("Decode error: {0}")]
    Decode(String),
}

/// 存储过程位置参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcParam {
    Int(i64),
    Text(String),
    Null,
}

impl From<i64> for ProcParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ProcParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ProcParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<ProcParam>> From<Option<T>> for ProcParam {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// 存储过程名只允许 `schema.name` 形式的标识符
pub fn is_valid_procedure_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

/// Procedure Invoker Port
#[async_trait]
pub trait ProcedureInvokerPort: Send + Sync {
    /// 执行存储过程，返回第一个结果集；没有结果集时返回空
    async fn exec(&self, name: &str, params: Vec<ProcParam>) -> Result<ResultSet, ProcedureError> {
        let mut sets = self.exec_multi(name, params).await?;
        if sets.is_empty() {
            return Ok(Vec::new());
        }
        Ok(sets.swap_remove(0))
    }

    /// 执行存储过程，按顺序返回全部结果集（空结果集保留位置）
    async fn exec_multi(
        &self,
        name: &str,
        params: Vec<ProcParam>,
    ) -> Result<Vec<ResultSet>, ProcedureError>;

    /// 连通性探测，返回一个数据库名
    async fn ping(&self) -> Result<Option<String>, ProcedureError>;
}
