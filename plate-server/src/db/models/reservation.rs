//! Reservation Model

use super::serde_helpers;
use crate::utils::time::qr_code_for;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{CartItem, RESERVATION_STATUS_UPCOMING, SelectedTable};
use surrealdb::RecordId;

/// Reservation document (预订)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_key"
    )]
    pub id: Option<RecordId>,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub date: String,
    pub time: String,
    /// Minutes
    pub duration: u32,
    /// Party size
    pub people: u32,
    #[serde(default)]
    pub selected_tables: Option<Vec<SelectedTable>>,
    #[serde(default)]
    pub total_capacity: Option<u32>,
    #[serde(default)]
    pub pre_ordered_food: Vec<CartItem>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub qr_code: String,
    #[serde(with = "serde_helpers::timestamp")]
    pub created_at: DateTime<Utc>,
}

fn default_status() -> String {
    RESERVATION_STATUS_UPCOMING.to_string()
}

/// Create reservation payload
///
/// `qrCode`, `status`, `id` and `createdAt` are never read from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub people: u32,
    #[serde(default)]
    pub selected_tables: Option<Vec<SelectedTable>>,
    #[serde(default)]
    pub total_capacity: Option<u32>,
    #[serde(default)]
    pub pre_ordered_food: Vec<CartItem>,
    #[serde(default)]
    pub total_price: f64,
}

impl ReservationCreate {
    /// Build the document to persist; the QR token derives from `created_at`
    pub fn into_reservation(self, created_at: DateTime<Utc>) -> Reservation {
        Reservation {
            id: None,
            restaurant_id: self.restaurant_id,
            restaurant_name: self.restaurant_name,
            date: self.date,
            time: self.time,
            duration: self.duration,
            people: self.people,
            selected_tables: self.selected_tables,
            total_capacity: self.total_capacity,
            pre_ordered_food: self.pre_ordered_food,
            status: default_status(),
            total_price: self.total_price,
            qr_code: qr_code_for(&created_at),
            created_at,
        }
    }
}
