//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;
use shared::models::cart_total;

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate};
use crate::db::repository::OrderRepository;
use crate::utils::id::parse_record_key;
use crate::utils::validation::validate_order_create;
use crate::utils::{AppError, AppResult};

/// POST /api/orders - 创建订单
///
/// 不校验餐厅是否存在，也不重新计算总价。
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> AppResult<Json<Order>> {
    let Json(payload) = payload?;
    validate_order_create(&payload)?;

    let items_total = cart_total(&payload.items);
    if (items_total - payload.total_price).abs() > 0.005 {
        tracing::debug!(
            items_total,
            total_price = payload.total_price,
            "Client total differs from item sum; stored as sent"
        );
    }

    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .create(payload.into_order(Utc::now()))
        .await?
        .ok_or_else(|| AppError::internal("Store returned no order after create"))?;

    tracing::info!(
        restaurant_id = %order.restaurant_id,
        order_type = %order.order_type,
        items = order.items.len(),
        "Order created"
    );
    Ok(Json(order))
}

/// GET /api/orders - 获取订单列表 (最新在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_all().await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let key = parse_record_key("order", &id)?;
    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .find_by_id(&key)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;
    Ok(Json(order))
}
