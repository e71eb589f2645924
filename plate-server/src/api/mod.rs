//! API 路由模块
//!
//! # 结构
//!
//! 所有路径都位于固定前缀 `/api` 下：
//!
//! - [`root`] - 欢迎信息
//! - [`health`] - 健康检查
//! - [`restaurants`] - 餐厅查询与楼层图
//! - [`orders`] - 订单
//! - [`reservations`] - 预订

pub mod health;
pub mod orders;
pub mod reservations;
pub mod restaurants;
pub mod root;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
