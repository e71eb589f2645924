//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use shared::models::FloorPlan;

use crate::core::ServerState;
use crate::db::models::{Restaurant, RestaurantFilter};
use crate::db::repository::RestaurantRepository;
use crate::utils::id::parse_record_key;
use crate::utils::{AppError, AppResult};

/// GET /api/restaurants - 获取餐厅列表 (可选 search / cuisine 过滤)
pub async fn list(
    State(state): State<ServerState>,
    filter: Result<Query<RestaurantFilter>, QueryRejection>,
) -> AppResult<Json<Vec<Restaurant>>> {
    let Query(filter) = filter?;
    let repo = RestaurantRepository::new(state.get_db());
    let restaurants = repo.find_all(&filter).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/:id - 获取单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Restaurant>> {
    let key = parse_record_key("restaurant", &id)?;
    let repo = RestaurantRepository::new(state.get_db());
    let restaurant = repo
        .find_by_id(&key)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant not found"))?;
    Ok(Json(restaurant))
}

/// GET /api/restaurants/:id/floor-plan - 楼层图 (固定布局，id 原样返回)
pub async fn floor_plan(Path(id): Path<String>) -> Json<FloorPlan> {
    Json(FloorPlan::for_restaurant(id))
}
