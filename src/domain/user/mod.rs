//! User Context - 用户限界上下文
//!
//! 职责:
//! - 注册 / 登录参数校验
//! - 角色默认值

mod value_objects;

pub use value_objects::{Email, UserRole};
