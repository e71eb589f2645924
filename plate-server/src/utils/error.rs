//! 统一错误处理
//!
//! 提供应用级错误类型 [`AppError`]，并映射为统一的 JSON 错误体：
//!
//! ```json
//! { "code": 3, "message": "Order 0f1e... not found" }
//! ```
//!
//! # 错误码规范
//!
//! | 变体 | HTTP | ErrorCode |
//! |------|------|-----------|
//! | Validation | 400 | ValidationFailed (2) |
//! | InvalidIdentifier | 400 | InvalidFormat (6) |
//! | NotFound | 404 | NotFound (3) |
//! | Database | 500 | DatabaseError (9002) |
//! | Internal | 500 | InternalError (9001) |
//!
//! # 使用示例
//!
//! ```ignore
//! Err(AppError::not_found("Order abc not found"))
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use shared::error::{ErrorBody, ErrorCode};
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
///
/// 标识符语法错误与记录不存在是两个独立变体，
/// 前者在查询数据库之前就已确定。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 请求错误 (4xx) ==========
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("{0}")]
    /// 标识符格式错误 (400)
    InvalidIdentifier(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Unified error code of this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationFailed,
            AppError::InvalidIdentifier(_) => ErrorCode::InvalidFormat,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let body = match self {
            AppError::Validation(msg) | AppError::InvalidIdentifier(msg) | AppError::NotFound(msg) => {
                ErrorBody::new(code, msg)
            }

            // 记录系统错误但不暴露详细信息
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                ErrorBody::from_code(code)
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                ErrorBody::from_code(code)
            }
        };

        (code.http_status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
