//! Staging Commands - 拣货到打包的交接

/// 把已完成的拣货会话放入待打包队列
#[derive(Debug, Clone)]
pub struct StageFromPick {
    pub session_id: i64,
}

/// 领取下一个待打包任务
#[derive(Debug, Clone)]
pub struct ClaimNextStaging {
    pub packed_by: i64,
    pub package_number: Option<String>,
}

/// 消费（完成）待打包任务
#[derive(Debug, Clone)]
pub struct ConsumeStaging {
    pub staging_id: i64,
}

/// 释放已领取的待打包任务
#[derive(Debug, Clone)]
pub struct ReleaseStaging {
    pub staging_id: i64,
}
