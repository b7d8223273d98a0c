//! Query Handlers 实现

mod auth_handlers;
mod delivery_handlers;
mod diag_handlers;
mod packing_handlers;
mod picking_handlers;
mod staging_handlers;
mod stock_handlers;

pub use auth_handlers::*;
pub use delivery_handlers::*;
pub use diag_handlers::*;
pub use packing_handlers::*;
pub use picking_handlers::*;
pub use staging_handlers::*;
pub use stock_handlers::*;
