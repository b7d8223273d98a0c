//! Picking Command Handlers
//!
//! 存储过程返回的列名不统一，这里按别名整理成移动端约定的字段。

use std::sync::Arc;

use crate::application::commands::{AddPickScan, CompletePick, StartPickSession};
use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort, ResultSet};
use crate::application::procedures;
use crate::application::rows::{first_row, RowExt};
use crate::domain::picking::{PickingSession, ScanItem};

pub(crate) const SCAN_ID_COLUMNS: &[&str] = &["ScanId", "Id"];
pub(crate) const BARCODE_COLUMNS: &[&str] = &["BarcodeOrSerial", "Barcode", "Serial"];
pub(crate) const QTY_COLUMNS: &[&str] = &["Qty", "Quantity", "QuantityPicked"];
pub(crate) const SCANNED_AT_COLUMNS: &[&str] = &["ScannedAt", "CreatedAt", "Timestamp"];

/// StartPickSession Handler
pub struct StartPickSessionHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl StartPickSessionHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn handle(&self, command: StartPickSession) -> Result<PickingSession, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::PICK_START_SESSION,
                vec![ProcParam::from(command.user_id)],
            )
            .await?;

        let row = first_row(rows).ok_or_else(|| ApplicationError::bad_request("Failed to start session"))?;

        let session = PickingSession {
            session_id: row.require_i64(&["SessionId", "PickSessionId", "Id"])?,
            user_id: row.i64_or(&["UserId", "UserID", "UID"], command.user_id)?,
            started_at: row.value_or_null(&["StartedAt", "CreatedAt", "StartTime"]),
            status: row.string_or(&["Status", "State"], PickingSession::DEFAULT_STATUS),
        };

        tracing::info!(
            session_id = session.session_id,
            user_id = session.user_id,
            "Picking session started"
        );

        Ok(session)
    }
}

/// AddPickScan Handler
pub struct AddPickScanHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl AddPickScanHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn handle(&self, command: AddPickScan) -> Result<ScanItem, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::PICK_ADD_SCAN,
                vec![
                    ProcParam::from(command.session_id),
                    ProcParam::from(command.barcode_or_serial.as_str()),
                    ProcParam::from(command.qty),
                ],
            )
            .await?;

        let row = first_row(rows).ok_or_else(|| ApplicationError::bad_request("Add scan failed"))?;

        Ok(ScanItem {
            scan_id: row.require_i64(SCAN_ID_COLUMNS)?,
            barcode_or_serial: row.string_or(BARCODE_COLUMNS, &command.barcode_or_serial),
            qty: row.i64_or(QTY_COLUMNS, command.qty)?,
            scanned_at: row.value_or_null(SCANNED_AT_COLUMNS),
        })
    }
}

/// CompletePick Handler
///
/// 汇总结果原样透传，供下一环节（staging）使用
pub struct CompletePickHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl CompletePickHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn handle(&self, command: CompletePick) -> Result<ResultSet, ApplicationError> {
        let summary = self
            .invoker
            .exec(
                procedures::PICK_COMPLETE,
                vec![ProcParam::from(command.session_id)],
            )
            .await?;

        tracing::info!(
            session_id = command.session_id,
            lines = summary.len(),
            "Picking session completed"
        );

        Ok(summary)
    }
}
