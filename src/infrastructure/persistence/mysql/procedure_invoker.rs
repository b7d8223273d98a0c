//! MySQL Procedure Invoker
//!
//! `CALL name(?, ...)` 执行存储过程，按结果集边界切分返回行。

use async_trait::async_trait;
use futures_util::TryStreamExt;
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::{Either, MySql};

use super::database::{DbPool, MISSING_DB_SETTINGS};
use super::row_mapping::row_to_json;
use crate::application::ports::{
    is_valid_procedure_name, ProcParam, ProcedureError, ProcedureInvokerPort, ResultSet, Row,
};

const PING_SQL: &str = "SELECT SCHEMA_NAME FROM information_schema.SCHEMATA LIMIT 1";

/// MySQL 存储过程调用器
///
/// 未配置连接参数时仍可构建，每次调用返回 `NotConfigured`。
#[derive(Clone)]
pub struct MySqlProcedureInvoker {
    pool: Option<DbPool>,
}

impl MySqlProcedureInvoker {
    pub fn new(pool: DbPool) -> Self {
        Self { pool: Some(pool) }
    }

    pub fn unconfigured() -> Self {
        Self { pool: None }
    }

    fn pool(&self) -> Result<&DbPool, ProcedureError> {
        self.pool
            .as_ref()
            .ok_or_else(|| ProcedureError::NotConfigured(MISSING_DB_SETTINGS.to_string()))
    }
}

/// 构建 CALL 语句，参数全部走占位符
pub(crate) fn call_sql(name: &str, arity: usize) -> Result<String, ProcedureError> {
    if !is_valid_procedure_name(name) {
        return Err(ProcedureError::InvalidName(name.to_string()));
    }
    let placeholders = vec!["?"; arity].join(", ");
    Ok(format!("CALL {name}({placeholders})"))
}

/// 按结果边界切分行
///
/// 每个 `Left` 结束一个结果集，空结果集保留位置；最后一个边界是 CALL 本身的状态包。
pub(crate) fn split_result_sets(steps: impl IntoIterator<Item = Either<(), Row>>) -> Vec<ResultSet> {
    let mut sets: Vec<ResultSet> = Vec::new();
    let mut current: ResultSet = Vec::new();

    for step in steps {
        match step {
            Either::Left(()) => sets.push(std::mem::take(&mut current)),
            Either::Right(row) => current.push(row),
        }
    }

    if !current.is_empty() {
        sets.push(current);
    }

    if sets.last().is_some_and(|set| set.is_empty()) {
        sets.pop();
    }

    sets
}

fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: Vec<ProcParam>,
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            ProcParam::Int(v) => query.bind(v),
            ProcParam::Text(v) => query.bind(v),
            ProcParam::Null => query.bind(None::<String>),
        };
    }
    query
}

#[async_trait]
impl ProcedureInvokerPort for MySqlProcedureInvoker {
    async fn exec_multi(
        &self,
        name: &str,
        params: Vec<ProcParam>,
    ) -> Result<Vec<ResultSet>, ProcedureError> {
        let pool = self.pool()?;
        let sql = call_sql(name, params.len())?;

        tracing::debug!(procedure = name, params = params.len(), "Calling stored procedure");

        #[allow(deprecated)]
        let mut stream = bind_params(sqlx::query(&sql), params).fetch_many(pool);

        let mut steps: Vec<Either<(), Row>> = Vec::new();
        while let Some(step) = stream
            .try_next()
            .await
            .map_err(|e| ProcedureError::Database(e.to_string()))?
        {
            steps.push(match step {
                Either::Left(_) => Either::Left(()),
                Either::Right(row) => Either::Right(row_to_json(&row)?),
            });
        }

        let sets = split_result_sets(steps);

        tracing::debug!(procedure = name, result_sets = sets.len(), "Stored procedure returned");

        Ok(sets)
    }

    async fn ping(&self) -> Result<Option<String>, ProcedureError> {
        let pool = self.pool()?;

        let name: Option<String> = sqlx::query_scalar(PING_SQL)
            .fetch_optional(pool)
            .await
            .map_err(|e| ProcedureError::Database(e.to_string()))?;

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(id: i64) -> Either<(), Row> {
        Either::Right(json!({"Id": id}).as_object().cloned().unwrap())
    }

    fn ids(sets: &[ResultSet]) -> Vec<Vec<i64>> {
        sets.iter()
            .map(|set| set.iter().map(|r| r["Id"].as_i64().unwrap()).collect())
            .collect()
    }

    #[test]
    fn test_split_procedure_without_select() {
        assert!(split_result_sets([Either::Left(())]).is_empty());
        assert!(split_result_sets(Vec::new()).is_empty());
    }

    #[test]
    fn test_split_single_empty_select() {
        let sets = split_result_sets([Either::Left(()), Either::Left(())]);
        assert_eq!(sets.len(), 1);
        assert!(sets[0].is_empty());
    }

    #[test]
    fn test_split_empty_second_set_keeps_slot() {
        let sets = split_result_sets([row(1), Either::Left(()), Either::Left(()), Either::Left(())]);
        assert_eq!(ids(&sets), vec![vec![1], vec![]]);
    }

    #[test]
    fn test_split_multiple_sets() {
        let sets = split_result_sets([
            row(1),
            Either::Left(()),
            row(2),
            row(3),
            Either::Left(()),
            Either::Left(()),
        ]);
        assert_eq!(ids(&sets), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn test_call_sql_placeholders() {
        assert_eq!(call_sql("usp_Pack_Seal", 1).unwrap(), "CALL usp_Pack_Seal(?)");
        assert_eq!(
            call_sql("usp_Delivery_ListPackages", 3).unwrap(),
            "CALL usp_Delivery_ListPackages(?, ?, ?)"
        );
        assert_eq!(call_sql("usp_NoArgs", 0).unwrap(), "CALL usp_NoArgs()");
    }

    #[test]
    fn test_call_sql_rejects_injection() {
        assert!(matches!(
            call_sql("usp_x(); DROP TABLE Users; --", 0),
            Err(ProcedureError::InvalidName(_))
        ));
    }

    #[tokio::test]
    async fn test_unconfigured_invoker_reports_missing_settings() {
        let invoker = MySqlProcedureInvoker::unconfigured();

        let err = invoker.exec("usp_Pick_StartSession", vec![ProcParam::Int(1)]).await.unwrap_err();
        assert_eq!(err.to_string(), MISSING_DB_SETTINGS);

        let err = invoker.ping().await.unwrap_err();
        assert!(matches!(err, ProcedureError::NotConfigured(_)));
    }
}
