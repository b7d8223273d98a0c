//! Stock-take Commands

use crate::domain::stock::CountQuantity;

/// 开始盘点
#[derive(Debug, Clone)]
pub struct StartStockTake {
    pub user_id: i64,
    pub name: Option<String>,
}

/// 记录一次盘点扫描
#[derive(Debug, Clone)]
pub struct AddStockCount {
    pub stock_take_id: i64,
    pub barcode_or_sku: String,
    pub qty: CountQuantity,
}

/// 撤销最近一次盘点扫描
#[derive(Debug, Clone)]
pub struct UndoLastStockCount {
    pub stock_take_id: i64,
}

/// 结束盘点，生成差异
#[derive(Debug, Clone)]
pub struct FinishStockTake {
    pub stock_take_id: i64,
}
