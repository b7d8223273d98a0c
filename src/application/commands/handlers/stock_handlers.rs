//! Stock-take Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    AddStockCount, FinishStockTake, StartStockTake, UndoLastStockCount,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort, ResultSet, Row};
use crate::application::procedures;
use crate::application::rows::first_row;

/// 盘点结束结果：表头、合计、差异明细
#[derive(Debug, Clone, Default)]
pub struct StockTakeResult {
    pub header: Row,
    pub totals: Row,
    pub discrepancies: ResultSet,
}

impl StockTakeResult {
    /// 按位置读取三个结果集，缺失的部分为空
    pub fn from_result_sets(sets: Vec<ResultSet>) -> Self {
        let mut sets = sets.into_iter();
        let header = sets.next().and_then(first_row).unwrap_or_default();
        let totals = sets.next().and_then(first_row).unwrap_or_default();
        let discrepancies = sets.next().unwrap_or_default();
        Self {
            header,
            totals,
            discrepancies,
        }
    }
}

/// Stock 命令处理器
pub struct StockCommandHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl StockCommandHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn start(&self, command: StartStockTake) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::STOCK_START_SESSION,
                vec![ProcParam::from(command.user_id), ProcParam::from(command.name)],
            )
            .await?;

        let session = first_row(rows)
            .ok_or_else(|| ApplicationError::bad_request("Failed to start stock session"))?;
        tracing::info!(user_id = command.user_id, "Stock take started");
        Ok(session)
    }

    /// 返回该商品更新后的盘点行
    pub async fn add_count(&self, command: AddStockCount) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::STOCK_ADD_COUNT,
                vec![
                    ProcParam::from(command.stock_take_id),
                    ProcParam::from(command.barcode_or_sku),
                    ProcParam::from(command.qty.get()),
                ],
            )
            .await?;

        first_row(rows).ok_or_else(|| ApplicationError::bad_request("Add count failed"))
    }

    /// 没有可撤销的记录时存储过程不返回行
    pub async fn undo_last(&self, command: UndoLastStockCount) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::STOCK_UNDO_LAST,
                vec![ProcParam::from(command.stock_take_id)],
            )
            .await?;

        first_row(rows).ok_or_else(|| ApplicationError::bad_request("Nothing to undo"))
    }

    pub async fn finish(&self, command: FinishStockTake) -> Result<StockTakeResult, ApplicationError> {
        let sets = self
            .invoker
            .exec_multi(
                procedures::STOCK_FINISH,
                vec![ProcParam::from(command.stock_take_id)],
            )
            .await?;

        let result = StockTakeResult::from_result_sets(sets);
        tracing::info!(
            stock_take_id = command.stock_take_id,
            discrepancies = result.discrepancies.len(),
            "Stock take finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn set(rows: Value) -> ResultSet {
        rows.as_array()
            .unwrap()
            .iter()
            .map(|r| r.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_finish_reads_three_sets() {
        let result = StockTakeResult::from_result_sets(vec![
            set(json!([{"StockTakeId": 10, "Name": "Cycle"}])),
            set(json!([{"TotalCounted": 15}])),
            set(json!([{"ProductId": 1, "Delta": -2}])),
        ]);

        assert_eq!(result.header.get("StockTakeId"), Some(&json!(10)));
        assert_eq!(result.totals.get("TotalCounted"), Some(&json!(15)));
        assert_eq!(result.discrepancies[0].get("Delta"), Some(&json!(-2)));
    }

    #[test]
    fn test_finish_tolerates_missing_sets() {
        let result = StockTakeResult::from_result_sets(vec![set(json!([])), set(json!([{"TotalCounted": 0}]))]);
        assert!(result.header.is_empty());
        assert_eq!(result.totals.get("TotalCounted"), Some(&json!(0)));
        assert!(result.discrepancies.is_empty());

        let result = StockTakeResult::from_result_sets(Vec::new());
        assert!(result.header.is_empty() && result.totals.is_empty());
    }
}
