//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status assigned to every new order
pub const ORDER_STATUS_ACTIVE: &str = "active";

/// Order fulfilment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    Delivery,
    Pickup,
    DineIn,
}

impl OrderType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderType::Delivery => "delivery",
            OrderType::Pickup => "pickup",
            OrderType::DineIn => "dine-in",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderType::DineIn).unwrap(),
            "\"dine-in\""
        );
        let parsed: OrderType = serde_json::from_str("\"pickup\"").unwrap();
        assert_eq!(parsed, OrderType::Pickup);
        assert!(serde_json::from_str::<OrderType>("\"takeaway\"").is_err());
    }

    #[test]
    fn test_display_matches_serde() {
        for t in [OrderType::Delivery, OrderType::Pickup, OrderType::DineIn] {
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{t}\""));
        }
    }
}
