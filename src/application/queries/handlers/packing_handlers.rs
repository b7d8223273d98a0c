//! Packing Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort, ResultSet, Row};
use crate::application::procedures;
use crate::application::queries::{GetPackageItems, GetPackageSummary, ValidatePackage};
use crate::application::rows::first_row;

/// 核对结果：每行一个问题（Missing / Over / Extra）
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: ResultSet,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Packing 查询处理器
pub struct PackingQueryHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl PackingQueryHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn items(&self, query: GetPackageItems) -> Result<ResultSet, ApplicationError> {
        Ok(self
            .invoker
            .exec(procedures::PACK_GET_ITEMS, vec![ProcParam::from(query.packing_id)])
            .await?)
    }

    /// 没有汇总行时返回空对象
    pub async fn summary(&self, query: GetPackageSummary) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(procedures::PACK_SUMMARY, vec![ProcParam::from(query.packing_id)])
            .await?;
        Ok(first_row(rows).unwrap_or_default())
    }

    pub async fn validate(&self, query: ValidatePackage) -> Result<ValidationReport, ApplicationError> {
        let issues = self
            .invoker
            .exec(
                procedures::PACK_VALIDATE_AGAINST_STAGING,
                vec![ProcParam::from(query.packing_id)],
            )
            .await?;
        Ok(ValidationReport { issues })
    }
}
