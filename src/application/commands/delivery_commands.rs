//! Delivery Commands

use crate::domain::delivery::DeliveryStatus;

/// 修改包裹装车状态
#[derive(Debug, Clone)]
pub struct UpdatePackageStatus {
    pub package_number: String,
    pub status: DeliveryStatus,
}

/// 扫码即装车
#[derive(Debug, Clone)]
pub struct ScanToLoad {
    pub scanned_number: String,
}
