//! Staging Command Handlers - 拣货到打包的交接

use std::sync::Arc;

use crate::application::commands::{ClaimNextStaging, ConsumeStaging, ReleaseStaging, StageFromPick};
use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort, ResultSet, Row};
use crate::application::procedures;
use crate::application::rows::first_row;

/// Staging 命令处理器
///
/// 四个交接动作共用同一个 invoker
pub struct StagingCommandHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl StagingCommandHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn stage_from_pick(&self, command: StageFromPick) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::PICK_STAGE_FOR_PACK,
                vec![ProcParam::from(command.session_id)],
            )
            .await?;

        let staged = first_row(rows).ok_or_else(|| ApplicationError::bad_request("Stage failed"))?;
        tracing::info!(session_id = command.session_id, "Pick staged for packing");
        Ok(staged)
    }

    pub async fn claim_next(&self, command: ClaimNextStaging) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::PACK_CLAIM_NEXT,
                vec![
                    ProcParam::from(command.packed_by),
                    ProcParam::from(command.package_number),
                ],
            )
            .await?;

        first_row(rows).ok_or_else(|| ApplicationError::not_found("No staged picks available"))
    }

    pub async fn consume(&self, command: ConsumeStaging) -> Result<ResultSet, ApplicationError> {
        let items = self
            .invoker
            .exec(
                procedures::PACK_CONSUME_STAGING,
                vec![ProcParam::from(command.staging_id)],
            )
            .await?;
        Ok(items)
    }

    pub async fn release(&self, command: ReleaseStaging) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::PACK_RELEASE_STAGING,
                vec![ProcParam::from(command.staging_id)],
            )
            .await?;

        first_row(rows).ok_or_else(|| ApplicationError::bad_request("Release failed"))
    }
}
