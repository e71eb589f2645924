//! Reservation Model

use serde::{Deserialize, Serialize};

/// Status assigned to every new reservation
pub const RESERVATION_STATUS_UPCOMING: &str = "upcoming";

/// Table picked on the floor plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedTable {
    pub table_number: String,
    pub capacity: u32,
}
