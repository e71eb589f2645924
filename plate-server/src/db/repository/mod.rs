//! Repository Module
//!
//! Provides store operations for the SurrealDB tables. Each operation is a
//! single round trip; no retries and no application-level timeouts.

pub mod order;
pub mod reservation;
pub mod restaurant;

// Re-exports
pub use order::OrderRepository;
pub use reservation::ReservationRepository;
pub use restaurant::RestaurantRepository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Upper bound on list results
pub const LIST_LIMIT: usize = 100;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 对外只暴露纯键 (key)
// =============================================================================
//
//   - 生成: utils::id::new_record_key() (UUID v4 simple)
//   - 查询: db.select((TABLE, key))
//   - 输出: serde_helpers::option_record_key 去掉表名前缀
//
// 路径参数在进入 repository 之前已由 utils::id::parse_record_key 校验。

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}
