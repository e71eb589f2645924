//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (HTTP 层)
//! - [`validation`] - 请求体校验
//! - [`id`] - 记录键生成与解析
//! - [`time`] - 时间戳格式化
//! - 日志初始化

pub mod error;
pub mod id;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
