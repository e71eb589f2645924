//! PlateHub Server - 餐饮点单与订座演示后端
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): `/api` 前缀下的 RESTful 接口
//! - **数据库** (`db`): SurrealDB 文档存储 (嵌入式或远程)
//! - **种子数据** (`db::seed`): 启动时写入 4 家演示餐厅
//!
//! # 模块结构
//!
//! ```text
//! plate-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装与中间件栈
//! ├── middleware/    # 请求日志
//! ├── db/            # 模型、仓储、种子数据
//! └── utils/         # 错误、校验、ID、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use routes::{ApiResponse, ApiRouter, build_app};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
