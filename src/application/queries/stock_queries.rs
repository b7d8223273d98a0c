//! Stock-take Queries

/// 盘点中的商品，可按 SKU / 名称过滤
#[derive(Debug, Clone)]
pub struct ListStockItems {
    pub stock_take_id: i64,
    pub search: Option<String>,
}
