//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod procedures;
pub mod security;

pub use procedures::*;
pub use security::*;
