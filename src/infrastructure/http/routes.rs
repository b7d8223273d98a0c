//! HTTP Routes
//!
//! API Endpoints（除标注 open 外均需 API Key）:
//! - /healthz                               GET   open
//! - /auth/register | /auth/login           POST
//! - /auth/me                               GET   Bearer token
//! - /picking/health                        GET   open
//! - /picking/start | add-scan | complete   POST
//! - /picking/:sessionId/recent             GET
//! - /staging/from-pick/:sessionId          POST
//! - /staging/claim-next | consume | release POST
//! - /staging/:stagingId/lines              GET
//! - /packing/start-or-set | add-item       POST
//! - /packing/:packingId/{items,summary}    GET
//! - /packing/:packingId/{undo-last,clear,seal} POST
//! - /packing/{items,validate}?packingId    GET
//! - /packing/{undo-last,clear,seal}?packingId POST
//! - /delivery/list | /delivery/:pkg        GET
//! - /delivery/:pkg/mark-{loaded,to-load,delivered} POST
//! - /delivery/scan-to-load                 POST
//! - /stock/start | add                     POST
//! - /stock/:id/items                       GET
//! - /stock/:id/{undo-last,finish}          POST
//! - /diag/db-ping                          GET

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::require_api_key;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(state: &AppState) -> Router<Arc<AppState>> {
    let protected = Router::new()
        .nest("/auth", auth_routes())
        .nest("/picking", picking_routes())
        .nest("/staging", staging_routes())
        .nest("/packing", packing_routes())
        .nest("/delivery", delivery_routes())
        .nest("/stock", stock_routes())
        .route("/diag/db-ping", get(handlers::db_ping))
        .route_layer(middleware::from_fn_with_state(
            state.api_key_gate.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/picking/health", get(handlers::picking_health))
        .merge(protected)
}

/// Auth 路由
fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/me", get(handlers::me))
}

/// Picking 路由（health 在外层，免 key）
fn picking_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/start", post(handlers::start_pick_session))
        .route("/add-scan", post(handlers::add_pick_scan))
        .route("/:session_id/recent", get(handlers::recent_scans))
        .route("/complete", post(handlers::complete_pick))
}

/// Staging 路由
fn staging_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::staging_health))
        .route("/from-pick/:session_id", post(handlers::stage_from_pick))
        .route("/claim-next", post(handlers::claim_next_staging))
        .route("/:staging_id/lines", get(handlers::staged_lines))
        .route("/consume", post(handlers::consume_staging))
        .route("/release", post(handlers::release_staging))
}

/// Packing 路由
fn packing_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::packing_health))
        .route("/start-or-set", post(handlers::start_or_set_package))
        .route("/add-item", post(handlers::add_pack_item))
        .route("/:packing_id/items", get(handlers::package_items))
        .route("/:packing_id/undo-last", post(handlers::undo_last_pack_item))
        .route("/:packing_id/clear", post(handlers::clear_package))
        .route("/:packing_id/seal", post(handlers::seal_package))
        .route("/:packing_id/summary", get(handlers::package_summary))
        // 移动端使用的 query 参数形式
        .route("/items", get(handlers::package_items_by_query))
        .route("/validate", get(handlers::validate_package))
        .route("/undo-last", post(handlers::undo_last_pack_item_by_query))
        .route("/clear", post(handlers::clear_package_by_query))
        .route("/seal", post(handlers::seal_package_by_query))
}

/// Delivery 路由
fn delivery_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::delivery_health))
        .route("/list", get(handlers::list_packages))
        .route("/scan-to-load", post(handlers::scan_to_load))
        .route("/:package_number", get(handlers::package_details))
        .route("/:package_number/mark-loaded", post(handlers::mark_loaded))
        .route("/:package_number/mark-to-load", post(handlers::mark_to_load))
        .route("/:package_number/mark-delivered", post(handlers::mark_delivered))
}

/// Stock 路由
fn stock_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::stock_health))
        .route("/start", post(handlers::start_stock_take))
        .route("/add", post(handlers::add_stock_count))
        .route("/:stock_take_id/items", get(handlers::stock_items))
        .route("/:stock_take_id/undo-last", post(handlers::undo_last_stock_count))
        .route("/:stock_take_id/finish", post(handlers::finish_stock_take))
}
