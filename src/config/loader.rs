//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `WAREHOUSE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `WAREHOUSE_SERVER__PORT=8080`
/// - `WAREHOUSE_SECURITY__API_KEY=...`
/// - `WAREHOUSE_DATABASE__HOST=tcp-host.example.net`
/// - `WAREHOUSE_DATABASE__PASSWORD=...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.environment", "development")?
        .set_default("security.api_key", "dev-key")?
        .set_default("security.api_key_header", "X-API-Key")?
        .set_default("security.jwt_secret", "dev-secret-change-me")?
        .set_default("security.jwt_issuer", "insy7315-warehouse")?
        .set_default("security.jwt_audience", "insy7315-mobile")?
        .set_default("security.jwt_expire_minutes", 1440)?
        .set_default("database.port", 3306)?
        .set_default("database.require_tls", true)?
        .set_default("database.connect_timeout_secs", 30)?
        .set_default("database.max_connections", 5)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: WAREHOUSE_DATABASE__NAME=warehouse
    builder = builder.add_source(
        Environment::with_prefix("WAREHOUSE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 数据库连接参数不在此校验：缺失时服务仍可启动，诊断接口会报告错误。
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.security.jwt_secret.is_empty() {
        return Err(ConfigError::ValidationError(
            "JWT secret cannot be empty".to_string(),
        ));
    }

    if config.security.jwt_expire_minutes <= 0 {
        return Err(ConfigError::ValidationError(
            "JWT expiry must be a positive number of minutes".to_string(),
        ));
    }

    if config.security.api_key_header.is_empty() {
        return Err(ConfigError::ValidationError(
            "API key header name cannot be empty".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max connections cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），密钥类字段只显示是否已设置
pub fn print_config(config: &AppConfig) {
    let db = &config.database;
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Environment: {}", config.server.environment);
    tracing::info!("API Key Header: {}", config.security.api_key_header);
    tracing::info!("API Key Set: {}", !config.security.api_key.is_empty());
    tracing::info!(
        "JWT: iss={} aud={} ttl={}min",
        config.security.jwt_issuer,
        config.security.jwt_audience,
        config.security.jwt_expire_minutes
    );
    tracing::info!(
        "Database: {}:{}/{}",
        db.host.as_deref().unwrap_or("<unset>"),
        db.port,
        db.name.as_deref().unwrap_or("<unset>")
    );
    tracing::info!("Database User: {}", db.user.as_deref().unwrap_or("<unset>"));
    tracing::info!("Database TLS Required: {}", db.require_tls);
    tracing::info!("Database Max Connections: {}", db.max_connections);
    if !db.is_complete() {
        tracing::warn!("Database settings incomplete; procedure calls will fail");
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
