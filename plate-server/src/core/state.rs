use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::seed::seed_restaurants;

/// 服务器状态 - 持有所有共享资源
///
/// 通过 axum `State` 注入处理器。克隆成本很低 (数据库句柄内部共享)。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SurrealDB 连接 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 1. 连接数据库
    /// 2. 按 SEED_POLICY 写入演示数据
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(config).await?;
        seed_restaurants(db.client(), config.seed_policy).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 数据库客户端句柄
    pub fn get_db(&self) -> Surreal<Any> {
        self.db.client()
    }
}
