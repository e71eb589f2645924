//! Order Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{CartItem, ORDER_STATUS_ACTIVE, OrderType};
use surrealdb::RecordId;

/// Order document (订单)
///
/// `totalPrice` is taken from the client as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_key"
    )]
    pub id: Option<RecordId>,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub items: Vec<CartItem>,
    pub order_type: OrderType,
    #[serde(default = "default_status")]
    pub status: String,
    pub total_price: f64,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub pickup_time: Option<String>,
    #[serde(with = "serde_helpers::timestamp")]
    pub created_at: DateTime<Utc>,
}

fn default_status() -> String {
    ORDER_STATUS_ACTIVE.to_string()
}

/// Create order payload
///
/// Unknown fields (`id`, `status`, `createdAt`) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub items: Vec<CartItem>,
    pub order_type: OrderType,
    pub total_price: f64,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub pickup_time: Option<String>,
}

impl OrderCreate {
    /// Build the document to persist
    pub fn into_order(self, created_at: DateTime<Utc>) -> Order {
        Order {
            id: None,
            restaurant_id: self.restaurant_id,
            restaurant_name: self.restaurant_name,
            items: self.items,
            order_type: self.order_type,
            status: default_status(),
            total_price: self.total_price,
            delivery_address: self.delivery_address,
            pickup_time: self.pickup_time,
            created_at,
        }
    }
}
