//! HTTP Layer - RESTful API
//!
//! 仓库移动端使用的 JSON 接口，业务逻辑全部在存储过程中

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ApiError;
pub use middleware::ApiKeyGate;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
