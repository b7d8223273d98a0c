//! Delivery Command Handlers

use std::sync::Arc;

use crate::application::commands::{ScanToLoad, UpdatePackageStatus};
use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort, Row};
use crate::application::procedures;
use crate::application::rows::first_row;
use crate::domain::delivery::DeliveryStatus;

/// Delivery 命令处理器
pub struct DeliveryCommandHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl DeliveryCommandHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    /// 每个目标状态对应一个存储过程，返回更新后的包裹行
    pub async fn update_status(&self, command: UpdatePackageStatus) -> Result<Row, ApplicationError> {
        let (procedure, failure) = match command.status {
            DeliveryStatus::Loaded => (procedures::DELIVERY_MARK_LOADED, "Could not mark loaded"),
            DeliveryStatus::ToLoad => (
                procedures::DELIVERY_MARK_TO_LOAD,
                "Could not revert to 'To Load'",
            ),
            DeliveryStatus::Delivered => (
                procedures::DELIVERY_MARK_DELIVERED,
                "Could not mark delivered",
            ),
        };

        let rows = self
            .invoker
            .exec(procedure, vec![ProcParam::from(command.package_number.as_str())])
            .await?;

        let updated = first_row(rows).ok_or_else(|| ApplicationError::bad_request(failure))?;

        tracing::info!(
            package_number = %command.package_number,
            status = %command.status,
            "Package status updated"
        );

        Ok(updated)
    }

    pub async fn scan_to_load(&self, command: ScanToLoad) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::DELIVERY_SCAN_TO_LOAD,
                vec![ProcParam::from(command.scanned_number)],
            )
            .await?;

        first_row(rows).ok_or_else(|| ApplicationError::bad_request("Scan failed"))
    }
}
