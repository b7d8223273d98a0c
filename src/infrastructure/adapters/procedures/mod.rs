//! Procedure Adapter - 存储过程调用的替身实现

mod fake_procedure_invoker;

pub use fake_procedure_invoker::{FakeProcedureInvoker, ProcedureCall};
