//! Delivery Queries

use crate::domain::delivery::{DeliveryStatus, ListLimit};

/// 包裹列表与各状态计数
#[derive(Debug, Clone, Default)]
pub struct ListDeliveryPackages {
    pub search: Option<String>,
    pub status: Option<DeliveryStatus>,
    pub top: ListLimit,
}

/// 单个包裹详情
#[derive(Debug, Clone)]
pub struct GetPackageDetails {
    pub package_number: String,
}
