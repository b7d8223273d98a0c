//! Stock Context - 盘点限界上下文

mod value_objects;

pub use value_objects::CountQuantity;
