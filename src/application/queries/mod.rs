//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：只读存储过程及令牌解析

mod auth_queries;
mod delivery_queries;
mod diag_queries;
mod packing_queries;
mod picking_queries;
mod staging_queries;
mod stock_queries;

pub mod handlers;

pub use auth_queries::*;
pub use delivery_queries::*;
pub use diag_queries::*;
pub use packing_queries::*;
pub use picking_queries::*;
pub use staging_queries::*;
pub use stock_queries::*;
