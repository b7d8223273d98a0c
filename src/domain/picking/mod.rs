//! Picking Context - 拣货限界上下文
//!
//! 移动端按固定字段解析拣货结果，存储过程的列名则不固定，
//! 这里定义对外的稳定结构。

mod entities;

pub use entities::{PickingSession, ScanItem, DEFAULT_RECENT_SCANS};
