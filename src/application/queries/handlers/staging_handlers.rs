//! Staging Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort, ResultSet};
use crate::application::procedures;
use crate::application::queries::GetStagedLines;

/// GetStagedLines Handler
pub struct GetStagedLinesHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl GetStagedLinesHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn handle(&self, query: GetStagedLines) -> Result<ResultSet, ApplicationError> {
        Ok(self
            .invoker
            .exec(
                procedures::PACK_GET_STAGED_LINES,
                vec![ProcParam::from(query.staging_id)],
            )
            .await?)
    }
}
