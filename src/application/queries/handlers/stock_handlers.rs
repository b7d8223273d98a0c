//! Stock-take Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort, ResultSet};
use crate::application::procedures;
use crate::application::queries::ListStockItems;

/// ListStockItems Handler
pub struct ListStockItemsHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl ListStockItemsHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn handle(&self, query: ListStockItems) -> Result<ResultSet, ApplicationError> {
        Ok(self
            .invoker
            .exec(
                procedures::STOCK_LIST_ITEMS,
                vec![ProcParam::from(query.stock_take_id), ProcParam::from(query.search)],
            )
            .await?)
    }
}
