//! Database Module
//!
//! SurrealDB 连接管理：`mem://` (嵌入式) 或 `ws://` / `wss://` (远程)。

pub mod models;
pub mod repository;
pub mod seed;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::Config;
use repository::RepoResult;

/// Database service: owns the SurrealDB client handle
///
/// The client multiplexes requests internally; clones share one connection.
#[derive(Clone)]
pub struct DbService {
    db: Surreal<Any>,
}

impl std::fmt::Debug for DbService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbService").finish_non_exhaustive()
    }
}

impl DbService {
    /// Connect, sign in (when credentials are configured) and select ns/db
    pub async fn connect(config: &Config) -> RepoResult<Self> {
        let db = any::connect(config.database_url.as_str()).await?;

        if let (Some(username), Some(password)) = (&config.db_user, &config.db_pass) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await?;
        }

        db.use_ns(config.db_namespace.as_str())
            .use_db(config.db_name.as_str())
            .await?;

        tracing::info!(
            url = %config.database_url,
            namespace = %config.db_namespace,
            database = %config.db_name,
            "Database connection established"
        );
        Ok(Self { db })
    }

    /// Client handle for repositories
    pub fn client(&self) -> Surreal<Any> {
        self.db.clone()
    }

    /// Round-trip check used by the health endpoint
    pub async fn health(&self) -> RepoResult<()> {
        self.db.health().await?;
        Ok(())
    }

    /// Release this handle
    ///
    /// The connection closes once the last clone drops, so call this after
    /// every other holder (router state, repositories) is gone.
    pub fn close(self) {
        drop(self.db);
        tracing::info!("Database handle released");
    }
}
