//! MySQL Persistence - 通过存储过程访问仓库数据库

mod database;
mod procedure_invoker;
mod row_mapping;

pub use database::*;
pub use procedure_invoker::*;
pub use row_mapping::row_to_json;
