//! Warehouse API - 仓库移动端的 HTTP 接口
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 业务逻辑都在数据库存储过程中，本服务负责鉴权、参数校验、调用存储过程并整理结果集。
//!
//! 领域层 (domain/):
//! - user / picking / delivery / stock 值对象
//!
//! 应用层 (application/):
//! - Ports: ProcedureInvoker, PasswordHasher, TokenService
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（API Key 校验）
//! - Persistence: MySQL 存储过程调用
//! - Adapters: Argon2 密码哈希, JWT 令牌, Fake 存储过程（测试）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
