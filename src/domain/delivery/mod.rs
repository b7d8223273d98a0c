//! Delivery Context - 装车限界上下文
//!
//! 职责:
//! - 装车状态取值
//! - 列表条数上限

mod value_objects;

pub use value_objects::{DeliveryStatus, ListLimit};
