//! Packing Queries

/// 包裹内全部商品行
#[derive(Debug, Clone)]
pub struct GetPackageItems {
    pub packing_id: i64,
}

/// 包裹汇总（行数与总数量）
#[derive(Debug, Clone)]
pub struct GetPackageSummary {
    pub packing_id: i64,
}

/// 包裹与待打包清单核对
#[derive(Debug, Clone)]
pub struct ValidatePackage {
    pub packing_id: i64,
}
