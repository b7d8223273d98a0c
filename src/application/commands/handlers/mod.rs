//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod auth_handlers;
mod delivery_handlers;
mod packing_handlers;
mod picking_handlers;
mod staging_handlers;
mod stock_handlers;

pub use auth_handlers::*;
pub use delivery_handlers::*;
pub use packing_handlers::*;
pub use picking_handlers::*;
pub use staging_handlers::*;
pub use stock_handlers::*;

pub(crate) use picking_handlers::{BARCODE_COLUMNS, QTY_COLUMNS, SCANNED_AT_COLUMNS, SCAN_ID_COLUMNS};
