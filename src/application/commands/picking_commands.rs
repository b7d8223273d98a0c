//! Picking Commands

/// 开始拣货会话
#[derive(Debug, Clone)]
pub struct StartPickSession {
    pub user_id: i64,
}

/// 记录一次扫描
#[derive(Debug, Clone)]
pub struct AddPickScan {
    pub session_id: i64,
    pub barcode_or_serial: String,
    pub qty: i64,
}

/// 完成拣货会话
#[derive(Debug, Clone)]
pub struct CompletePick {
    pub session_id: i64,
}
