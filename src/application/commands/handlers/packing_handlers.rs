//! Packing Command Handlers

use serde_json::json;
use std::sync::Arc;

use crate::application::commands::{
    AddPackItem, ClearPackage, SealPackage, StartOrSetPackage, UndoLastPackItem,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort, Row};
use crate::application::procedures;
use crate::application::queries::handlers::PackingQueryHandler;
use crate::application::queries::ValidatePackage;
use crate::application::rows::first_row;

/// Packing 命令处理器
pub struct PackingCommandHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
    validator: PackingQueryHandler,
}

impl PackingCommandHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self {
            validator: PackingQueryHandler::new(invoker.clone()),
            invoker,
        }
    }

    pub async fn start_or_set(&self, command: StartOrSetPackage) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::PACK_START_OR_SET,
                vec![ProcParam::from(command.package_number)],
            )
            .await?;

        first_row(rows).ok_or_else(|| ApplicationError::bad_request("Could not start or set package"))
    }

    pub async fn add_item(&self, command: AddPackItem) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::PACK_ADD_ITEM,
                vec![
                    ProcParam::from(command.packing_id),
                    ProcParam::from(command.barcode_or_serial),
                    ProcParam::from(command.qty),
                ],
            )
            .await?;

        first_row(rows).ok_or_else(|| ApplicationError::bad_request("Add item failed"))
    }

    /// 存储过程总会返回一个小结果；为空时按未删除处理
    pub async fn undo_last(&self, command: UndoLastPackItem) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::PACK_UNDO_LAST,
                vec![ProcParam::from(command.packing_id)],
            )
            .await?;

        Ok(first_row(rows).unwrap_or_else(|| counter_row("Removed")))
    }

    pub async fn clear(&self, command: ClearPackage) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(procedures::PACK_CLEAR, vec![ProcParam::from(command.packing_id)])
            .await?;

        Ok(first_row(rows).unwrap_or_else(|| counter_row("Cleared")))
    }

    /// 封箱前先核对待打包清单，有问题时返回冲突和问题清单
    pub async fn seal(&self, command: SealPackage) -> Result<Row, ApplicationError> {
        let report = self
            .validator
            .validate(ValidatePackage {
                packing_id: command.packing_id,
            })
            .await?;

        if !report.is_ok() {
            tracing::warn!(
                packing_id = command.packing_id,
                issues = report.issues.len(),
                "Seal blocked by staging validation"
            );
            return Err(ApplicationError::Conflict {
                message: format!(
                    "Staged requirements not satisfied ({} issue(s))",
                    report.issues.len()
                ),
                issues: report.issues,
            });
        }

        let rows = self
            .invoker
            .exec(procedures::PACK_SEAL, vec![ProcParam::from(command.packing_id)])
            .await?;

        let sealed = first_row(rows).ok_or_else(|| ApplicationError::bad_request("Seal failed"))?;
        tracing::info!(packing_id = command.packing_id, "Package sealed");
        Ok(sealed)
    }
}

fn counter_row(column: &str) -> Row {
    let mut row = Row::new();
    row.insert(column.to_string(), json!(0));
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeProcedureInvoker;
    use serde_json::Value;

    #[tokio::test]
    async fn test_undo_and_clear_default_counters() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        let handler = PackingCommandHandler::new(invoker);

        let undone = handler.undo_last(UndoLastPackItem { packing_id: 22 }).await.unwrap();
        assert_eq!(Value::Object(undone), json!({"Removed": 0}));

        let cleared = handler.clear(ClearPackage { packing_id: 22 }).await.unwrap();
        assert_eq!(Value::Object(cleared), json!({"Cleared": 0}));
    }

    #[tokio::test]
    async fn test_seal_blocked_by_issues_never_calls_seal() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(
            procedures::PACK_VALIDATE_AGAINST_STAGING,
            vec![json!({"Issue": "Missing", "ProductId": 1, "Required": 2, "Packed": 0, "Delta": 2})],
        );
        invoker.respond(procedures::PACK_SEAL, vec![json!({"PackingId": 22, "Status": "Sealed"})]);

        let err = PackingCommandHandler::new(invoker.clone())
            .seal(SealPackage { packing_id: 22 })
            .await
            .unwrap_err();

        match err {
            ApplicationError::Conflict { message, issues } => {
                assert!(message.starts_with("Staged requirements not satisfied"));
                assert_eq!(issues.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(invoker
            .calls()
            .iter()
            .all(|call| call.name != procedures::PACK_SEAL));
    }

    #[tokio::test]
    async fn test_seal_happy_path() {
        let invoker = Arc::new(FakeProcedureInvoker::new());
        invoker.respond(procedures::PACK_SEAL, vec![json!({"PackingId": 22, "Status": "Sealed"})]);

        let sealed = PackingCommandHandler::new(invoker)
            .seal(SealPackage { packing_id: 22 })
            .await
            .unwrap();

        assert_eq!(sealed.get("Status"), Some(&json!("Sealed")));
    }
}
