//! Fake Procedure Invoker - 用于测试的存储过程调用器
//!
//! 不连接数据库：按过程名返回预先设定的结果集，并记录每次调用

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::application::ports::{
    ProcParam, ProcedureError, ProcedureInvokerPort, ResultSet, Row,
};

/// 一次调用记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureCall {
    pub name: String,
    pub params: Vec<ProcParam>,
}

/// 预设的响应
#[derive(Debug, Clone)]
enum Scripted {
    Sets(Vec<ResultSet>),
    Failure(String),
}

/// Fake Procedure Invoker
///
/// 未设定的过程返回“没有结果集”，与不产生 SELECT 的存储过程一致
#[derive(Debug, Default)]
pub struct FakeProcedureInvoker {
    responses: Mutex<HashMap<String, Scripted>>,
    ping: Mutex<Option<Result<Option<String>, String>>>,
    calls: Mutex<Vec<ProcedureCall>>,
}

impl FakeProcedureInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设定单结果集响应；每个元素必须是 JSON 对象
    pub fn respond(&self, name: &str, rows: Vec<Value>) {
        self.respond_sets(name, vec![rows]);
    }

    /// 设定多结果集响应
    pub fn respond_sets(&self, name: &str, sets: Vec<Vec<Value>>) {
        let sets = sets.into_iter().map(into_result_set).collect();
        self.lock_responses().insert(name.to_string(), Scripted::Sets(sets));
    }

    /// 设定数据库错误
    pub fn fail(&self, name: &str, message: impl Into<String>) {
        self.lock_responses()
            .insert(name.to_string(), Scripted::Failure(message.into()));
    }

    /// 设定 ping 结果，`Err` 表示连接失败
    pub fn set_ping(&self, result: Result<Option<String>, String>) {
        *self.ping.lock().unwrap_or_else(|e| e.into_inner()) = Some(result);
    }

    /// 已发生的调用（按顺序）
    pub fn calls(&self) -> Vec<ProcedureCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<String, Scripted>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn into_result_set(rows: Vec<Value>) -> ResultSet {
    rows.into_iter()
        .map(|value| match value {
            Value::Object(map) => map,
            other => {
                let mut row = Row::new();
                row.insert("value".to_string(), other);
                row
            }
        })
        .collect()
}

#[async_trait]
impl ProcedureInvokerPort for FakeProcedureInvoker {
    async fn exec_multi(
        &self,
        name: &str,
        params: Vec<ProcParam>,
    ) -> Result<Vec<ResultSet>, ProcedureError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ProcedureCall {
                name: name.to_string(),
                params,
            });

        match self.lock_responses().get(name) {
            Some(Scripted::Sets(sets)) => Ok(sets.clone()),
            Some(Scripted::Failure(message)) => Err(ProcedureError::Database(message.clone())),
            None => Ok(Vec::new()),
        }
    }

    async fn ping(&self) -> Result<Option<String>, ProcedureError> {
        match self.ping.lock().unwrap_or_else(|e| e.into_inner()).clone() {
            Some(Ok(sample)) => Ok(sample),
            Some(Err(message)) => Err(ProcedureError::Database(message)),
            None => Ok(None),
        }
    }
}
