//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：所有会改变数据库状态的存储过程调用

mod auth_commands;
mod delivery_commands;
mod packing_commands;
mod picking_commands;
mod staging_commands;
mod stock_commands;

pub mod handlers;

pub use auth_commands::*;
pub use delivery_commands::*;
pub use packing_commands::*;
pub use picking_commands::*;
pub use staging_commands::*;
pub use stock_commands::*;
