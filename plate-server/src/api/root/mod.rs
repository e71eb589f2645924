//! 根路由

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
}

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

/// GET /api/ - 欢迎信息
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Food Super App API",
    })
}
