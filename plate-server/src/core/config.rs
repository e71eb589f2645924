use crate::db::seed::{InvalidSeedPolicy, SeedPolicy};

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (支持 `.env` 文件)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8001 | HTTP 服务端口 (监听 0.0.0.0) |
/// | DATABASE_URL | mem:// | SurrealDB 连接串 |
/// | DB_NAMESPACE | platehub | SurrealDB namespace |
/// | DB_NAME | platehub | SurrealDB database |
/// | DB_USER / DB_PASS | - | root 凭据 (两者都设置时登录) |
/// | SEED_POLICY | preserve | preserve / fresh / skip |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录 (存在时按天滚动写文件) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=ws://localhost:8000 SEED_POLICY=fresh cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SurrealDB 连接串
    pub database_url: String,
    pub db_namespace: String,
    pub db_name: String,
    pub db_user: Option<String>,
    pub db_pass: Option<String>,
    /// 启动时种子数据策略
    pub seed_policy: SeedPolicy,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SEED_POLICY: {0}")]
    SeedPolicy(#[from] InvalidSeedPolicy),

    #[error("HTTP_PORT: '{0}' is not a valid port")]
    Port(String),
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；`HTTP_PORT` 或 `SEED_POLICY` 非法时返回错误
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置 (测试中避免修改进程环境)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed_policy = match non_empty("SEED_POLICY") {
            Some(raw) => raw.parse()?,
            None => defaults.seed_policy,
        };

        let http_port = match non_empty("HTTP_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Port(raw))?,
            None => defaults.http_port,
        };

        Ok(Self {
            http_port,
            database_url: non_empty("DATABASE_URL").unwrap_or(defaults.database_url),
            db_namespace: non_empty("DB_NAMESPACE").unwrap_or(defaults.db_namespace),
            db_name: non_empty("DB_NAME").unwrap_or(defaults.db_name),
            db_user: non_empty("DB_USER"),
            db_pass: non_empty("DB_PASS"),
            seed_policy,
            environment: non_empty("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: non_empty("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: non_empty("LOG_DIR"),
        })
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    /// 内置默认值 (不读取环境变量)：嵌入式内存数据库
    fn default() -> Self {
        Self {
            http_port: 8001,
            database_url: "mem://".into(),
            db_namespace: "platehub".into(),
            db_name: "platehub".into(),
            db_user: None,
            db_pass: None,
            seed_policy: SeedPolicy::Preserve,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
