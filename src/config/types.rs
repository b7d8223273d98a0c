//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 安全配置（API Key、JWT）
    #[serde(default)]
    pub security: SecurityConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 环境标签，由 /healthz 返回
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 安全配置
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// 共享密钥；为空时拒绝所有受保护请求
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// 携带共享密钥的请求头
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,

    /// JWT 签名密钥（HS256）
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,

    #[serde(default = "default_jwt_audience")]
    pub jwt_audience: String,

    /// 令牌有效期（分钟），默认 24 小时
    #[serde(default = "default_jwt_expire_minutes")]
    pub jwt_expire_minutes: i64,
}

fn default_api_key() -> String {
    "dev-key".to_string()
}

fn default_api_key_header() -> String {
    "X-API-Key".to_string()
}

fn default_jwt_secret() -> String {
    "dev-secret-change-me".to_string()
}

fn default_jwt_issuer() -> String {
    "insy7315-warehouse".to_string()
}

fn default_jwt_audience() -> String {
    "insy7315-mobile".to_string()
}

fn default_jwt_expire_minutes() -> i64 {
    1440
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            api_key_header: default_api_key_header(),
            jwt_secret: default_jwt_secret(),
            jwt_issuer: default_jwt_issuer(),
            jwt_audience: default_jwt_audience(),
            jwt_expire_minutes: default_jwt_expire_minutes(),
        }
    }
}

/// 数据库配置
///
/// 连接参数全部可选：缺失时服务照常启动，每次数据库调用返回 500。
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default = "default_db_port")]
    pub port: u16,

    /// 数据库（schema）名
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// 是否强制 TLS
    #[serde(default = "default_require_tls")]
    pub require_tls: bool,

    /// 获取连接超时（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_port() -> u16 {
    3306
}

fn default_require_tls() -> bool {
    true
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: default_db_port(),
            name: None,
            user: None,
            password: None,
            require_tls: default_require_tls(),
            connect_timeout_secs: default_connect_timeout(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// 连接参数是否齐全
    pub fn is_complete(&self) -> bool {
        [&self.host, &self.name, &self.user, &self.password]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
