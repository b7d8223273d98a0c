//! Diagnostics Queries

/// 数据库连通性探测
#[derive(Debug, Clone, Copy, Default)]
pub struct PingDatabase;
