//! HTTP Handlers
//!
//! 每个功能一个文件，请求参数结构体与处理函数放在一起

mod auth;
mod delivery;
mod diag;
mod health;
mod packing;
mod picking;
mod staging;
mod stock;

pub use auth::*;
pub use delivery::*;
pub use diag::*;
pub use health::*;
pub use packing::*;
pub use picking::*;
pub use staging::*;
pub use stock::*;
