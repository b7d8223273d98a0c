//! Staging Queries

/// 待打包任务的商品行
#[derive(Debug, Clone)]
pub struct GetStagedLines {
    pub staging_id: i64,
}
