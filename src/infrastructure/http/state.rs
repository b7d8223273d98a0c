//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use super::middleware::ApiKeyGate;
use crate::application::{
    // Command handlers
    AddPickScanHandler, CompletePickHandler, DeliveryCommandHandler, LoginUserHandler,
    PackingCommandHandler, RegisterUserHandler, StagingCommandHandler, StartPickSessionHandler,
    StockCommandHandler,
    // Query handlers
    DeliveryQueryHandler, GetCurrentUserHandler, GetRecentScansHandler, GetStagedLinesHandler,
    ListStockItemsHandler, PackingQueryHandler, PingDatabaseHandler,
    // Ports
    PasswordHasherPort, ProcedureInvokerPort, TokenServicePort,
};
use crate::config::AppConfig;

/// 应用状态
///
/// 所有 handler 共享同一个存储过程调用器
pub struct AppState {
    // ========== Settings ==========
    /// `/healthz` 返回的环境标签
    pub environment: String,
    pub api_key_gate: ApiKeyGate,

    // ========== Command Handlers ==========
    pub register_user_handler: RegisterUserHandler,
    pub login_user_handler: LoginUserHandler,
    pub start_pick_session_handler: StartPickSessionHandler,
    pub add_pick_scan_handler: AddPickScanHandler,
    pub complete_pick_handler: CompletePickHandler,
    pub staging_handler: StagingCommandHandler,
    pub packing_handler: PackingCommandHandler,
    pub delivery_handler: DeliveryCommandHandler,
    pub stock_handler: StockCommandHandler,

    // ========== Query Handlers ==========
    pub get_current_user_handler: GetCurrentUserHandler,
    pub get_recent_scans_handler: GetRecentScansHandler,
    pub get_staged_lines_handler: GetStagedLinesHandler,
    pub packing_query_handler: PackingQueryHandler,
    pub delivery_query_handler: DeliveryQueryHandler,
    pub list_stock_items_handler: ListStockItemsHandler,
    pub ping_database_handler: PingDatabaseHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        config: &AppConfig,
        invoker: Arc<dyn ProcedureInvokerPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenServicePort>,
    ) -> Self {
        Self {
            // Settings
            environment: config.server.environment.clone(),
            api_key_gate: ApiKeyGate::new(
                config.security.api_key_header.clone(),
                config.security.api_key.clone(),
            ),

            // Command handlers
            register_user_handler: RegisterUserHandler::new(invoker.clone(), hasher.clone()),
            login_user_handler: LoginUserHandler::new(invoker.clone(), hasher, tokens.clone()),
            start_pick_session_handler: StartPickSessionHandler::new(invoker.clone()),
            add_pick_scan_handler: AddPickScanHandler::new(invoker.clone()),
            complete_pick_handler: CompletePickHandler::new(invoker.clone()),
            staging_handler: StagingCommandHandler::new(invoker.clone()),
            packing_handler: PackingCommandHandler::new(invoker.clone()),
            delivery_handler: DeliveryCommandHandler::new(invoker.clone()),
            stock_handler: StockCommandHandler::new(invoker.clone()),

            // Query handlers
            get_current_user_handler: GetCurrentUserHandler::new(tokens),
            get_recent_scans_handler: GetRecentScansHandler::new(invoker.clone()),
            get_staged_lines_handler: GetStagedLinesHandler::new(invoker.clone()),
            packing_query_handler: PackingQueryHandler::new(invoker.clone()),
            delivery_query_handler: DeliveryQueryHandler::new(invoker.clone()),
            list_stock_items_handler: ListStockItemsHandler::new(invoker.clone()),
            ping_database_handler: PingDatabaseHandler::new(invoker),
        }
    }
}
