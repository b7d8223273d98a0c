//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod procedure_invoker;
mod security;

pub use procedure_invoker::{
    is_valid_procedure_name, ProcParam, ProcedureError, ProcedureInvokerPort, ResultSet, Row,
};
pub use security::{
    PasswordHasherPort, SecurityError, SessionClaims, TokenServicePort, TokenSubject,
};
