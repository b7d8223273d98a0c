//! Picking Queries

/// 会话最近的扫描记录
#[derive(Debug, Clone)]
pub struct GetRecentScans {
    pub session_id: i64,
    pub top: i64,
}
