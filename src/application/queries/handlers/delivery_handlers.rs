//! Delivery Query Handlers

use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ProcParam, ProcedureInvokerPort, ResultSet, Row};
use crate::application::procedures;
use crate::application::queries::{GetPackageDetails, ListDeliveryPackages};
use crate::application::rows::first_row;

/// 包裹列表：第一个结果集为包裹，第二个结果集为计数
#[derive(Debug, Clone)]
pub struct DeliveryPackageList {
    pub items: ResultSet,
    pub counts: Row,
}

impl DeliveryPackageList {
    pub fn from_result_sets(sets: Vec<ResultSet>) -> Self {
        let mut sets = sets.into_iter();

        let Some(items) = sets.next() else {
            return Self {
                items: Vec::new(),
                counts: counts_row(json!(0), json!(0), json!(0)),
            };
        };

        // 存储过程没有给出计数时只能确定总数
        let counts = sets
            .next()
            .and_then(first_row)
            .unwrap_or_else(|| counts_row(json!(items.len()), Value::Null, Value::Null));

        Self { items, counts }
    }
}

fn counts_row(total: Value, to_load: Value, loaded: Value) -> Row {
    let mut row = Row::new();
    row.insert("Total".to_string(), total);
    row.insert("ToLoad".to_string(), to_load);
    row.insert("Loaded".to_string(), loaded);
    row
}

/// Delivery 查询处理器
pub struct DeliveryQueryHandler {
    invoker: Arc<dyn ProcedureInvokerPort>,
}

impl DeliveryQueryHandler {
    pub fn new(invoker: Arc<dyn ProcedureInvokerPort>) -> Self {
        Self { invoker }
    }

    pub async fn list(&self, query: ListDeliveryPackages) -> Result<DeliveryPackageList, ApplicationError> {
        let sets = self
            .invoker
            .exec_multi(
                procedures::DELIVERY_LIST_PACKAGES,
                vec![
                    ProcParam::from(query.search),
                    ProcParam::from(query.status.map(|s| s.as_str())),
                    ProcParam::from(query.top.get()),
                ],
            )
            .await?;

        Ok(DeliveryPackageList::from_result_sets(sets))
    }

    pub async fn details(&self, query: GetPackageDetails) -> Result<Row, ApplicationError> {
        let rows = self
            .invoker
            .exec(
                procedures::DELIVERY_GET_PACKAGE_DETAILS,
                vec![ProcParam::from(query.package_number)],
            )
            .await?;

        first_row(rows).ok_or_else(|| ApplicationError::not_found("Package not found"))
    }
}
