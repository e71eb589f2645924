//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate};
use crate::db::repository::ReservationRepository;
use crate::utils::id::parse_record_key;
use crate::utils::validation::validate_reservation_create;
use crate::utils::{AppError, AppResult};

/// POST /api/reservations - 创建预订
///
/// qrCode 由创建时间生成；预点菜品和所选桌台原样保存。
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ReservationCreate>, JsonRejection>,
) -> AppResult<Json<Reservation>> {
    let Json(payload) = payload?;
    validate_reservation_create(&payload)?;

    let repo = ReservationRepository::new(state.get_db());
    let reservation = repo
        .create(payload.into_reservation(Utc::now()))
        .await?
        .ok_or_else(|| AppError::internal("Store returned no reservation after create"))?;

    tracing::info!(
        restaurant_id = %reservation.restaurant_id,
        people = reservation.people,
        qr_code = %reservation.qr_code,
        "Reservation created"
    );
    Ok(Json(reservation))
}

/// GET /api/reservations - 获取预订列表 (最新在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.get_db());
    let reservations = repo.find_all().await?;
    Ok(Json(reservations))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let key = parse_record_key("reservation", &id)?;
    let repo = ReservationRepository::new(state.get_db());
    let reservation = repo
        .find_by_id(&key)
        .await?
        .ok_or_else(|| AppError::not_found("Reservation not found"))?;
    Ok(Json(reservation))
}
