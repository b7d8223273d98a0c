//! Warehouse API
//!
//! 启动顺序：配置 → 日志 → 存储过程调用器 → 安全组件 → HTTP 服务

use std::sync::Arc;

use warehouse_api::application::ProcedureInvokerPort;
use warehouse_api::config::{load_config, print_config};
use warehouse_api::infrastructure::adapters::{
    Argon2PasswordHasher, JwtTokenService, JwtTokenServiceConfig,
};
use warehouse_api::infrastructure::http::{AppState, HttpServer, ServerConfig};
use warehouse_api::infrastructure::persistence::mysql::create_pool;
use warehouse_api::infrastructure::persistence::MySqlProcedureInvoker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},warehouse_api={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Warehouse API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 数据库参数不完整时服务照常启动，每次调用返回 500
    let invoker: Arc<dyn ProcedureInvokerPort> = if config.database.is_complete() {
        let pool = create_pool(&config.database)?;
        Arc::new(MySqlProcedureInvoker::new(pool))
    } else {
        Arc::new(MySqlProcedureInvoker::unconfigured())
    };

    let hasher = Arc::new(Argon2PasswordHasher::new());
    let tokens = Arc::new(JwtTokenService::new(JwtTokenServiceConfig::from(
        &config.security,
    )));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(&config, invoker, hasher, tokens);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
