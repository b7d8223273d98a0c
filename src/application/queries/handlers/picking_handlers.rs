//! Picking Query Handlers

use std::sync::Arc;

use crate::application::commands::handlers::{
    BARCODE_COLUMNS, QTY_COLUMNS, SCANNED_AT_COLUMNS, SCAN_ID_COLUMNS,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort};
use crate::application::procedures;
use crate::application::queries::GetRecentScans;
use crate::application::rows::RowExt;
use crate::domain::picking::ScanItem;

/// GetRecentScans Handler
pub struct GetRecentScansHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl GetRecentScansHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn handle(&self, query: GetRecentScans) -> Result<Vec<ScanItem>, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::PICK_GET_RECENT_SCANS,
                vec![ProcParam::from(query.session_id), ProcParam::from(query.top)],
            )
            .await?;

        rows.iter()
            .map(|row| {
                Ok(ScanItem {
                    scan_id: row.require_i64(SCAN_ID_COLUMNS)?,
                    barcode_or_serial: row.string_or(BARCODE_COLUMNS, ""),
                    qty: row.i64_or(QTY_COLUMNS, 1)?,
                    scanned_at: row.value_or_null(SCANNED_AT_COLUMNS),
                })
            })
            .collect()
    }
}
