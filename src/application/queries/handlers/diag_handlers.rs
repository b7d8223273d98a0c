//! Diagnostics Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ProcedureInvokerPort;
use crate::application::queries::PingDatabase;

/// PingDatabase Handler
pub struct PingDatabaseHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl PingDatabaseHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    /// 返回探测到的数据库名
    pub async fn handle(&self, _query: PingDatabase) -> Result<Option<String>, ApplicationError> {
        let sample = self.invoker.ping().await.map_err(|e| {
            tracing::error!(error = %e, "Database ping failed");
            ApplicationError::from(e)
        })?;
        Ok(sample)
    }
}
