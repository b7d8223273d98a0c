//! Packing Commands

/// 新建包裹，或切换到已有包裹
///
/// `package_number` 为空时由存储过程生成 PKG-000001 形式的编号
#[derive(Debug, Clone)]
pub struct StartOrSetPackage {
    pub package_number: Option<String>,
}

/// 按条码或序列号向包裹加入商品
#[derive(Debug, Clone)]
pub struct AddPackItem {
    pub packing_id: i64,
    pub barcode_or_serial: String,
    pub qty: i64,
}

/// 撤销最近加入的一行
#[derive(Debug, Clone)]
pub struct UndoLastPackItem {
    pub packing_id: i64,
}

/// 清空包裹
#[derive(Debug, Clone)]
pub struct ClearPackage {
    pub packing_id: i64,
}

/// 封箱（先与待打包清单核对）
#[derive(Debug, Clone)]
pub struct SealPackage {
    pub packing_id: i64,
}
