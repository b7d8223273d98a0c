//! MySQL Database - 连接参数和连接池

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};
use std::time::Duration;

use crate::application::ports::ProcedureError;
use crate::config::DatabaseConfig;

/// 数据库连接池
pub type DbPool = MySqlPool;

/// 缺少连接参数时每次调用返回的消息
pub const MISSING_DB_SETTINGS: &str = "Missing DB env vars.";

/// 由配置构建连接参数；host/name/user/password 缺一不可
pub fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, ProcedureError> {
    let (Some(host), Some(name), Some(user), Some(password)) = (
        config.host.as_deref(),
        config.name.as_deref(),
        config.user.as_deref(),
        config.password.as_deref(),
    ) else {
        return Err(ProcedureError::NotConfigured(MISSING_DB_SETTINGS.to_string()));
    };

    let ssl_mode = if config.require_tls {
        MySqlSslMode::Required
    } else {
        MySqlSslMode::Preferred
    };

    Ok(MySqlConnectOptions::new()
        .host(host)
        .port(config.port)
        .database(name)
        .username(user)
        .password(password)
        .ssl_mode(ssl_mode))
}

/// 创建连接池
///
/// 连接按需建立，启动时不访问数据库。
pub fn create_pool(config: &DatabaseConfig) -> Result<DbPool, ProcedureError> {
    let options = connect_options(config)?;

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_lazy_with(options);

    tracing::info!(
        host = config.host.as_deref().unwrap_or_default(),
        database = config.name.as_deref().unwrap_or_default(),
        max_connections = config.max_connections,
        "MySQL pool created (lazy)"
    );

    Ok(pool)
}
