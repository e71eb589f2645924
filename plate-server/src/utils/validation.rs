//! Input validation helpers
//!
//! Centralized text length constants and validation functions for
//! create payloads. Every violation maps to a 400 validation error and
//! nothing is persisted.

use shared::models::{CartItem, OrderType, SelectedTable};

use crate::db::models::{OrderCreate, ReservationCreate};
use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: restaurant, menu item, table number
pub const MAX_NAME_LEN: usize = 200;

/// Short free text: date, time, pickup time
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Image references (URL or base64 data)
pub const MAX_IMAGE_LEN: usize = 2 * 1024 * 1024;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let chars = value.chars().count();
    if chars > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({chars} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        )));
    }
    Ok(())
}

/// Validate a money amount: finite and not negative.
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Validate a count that must be at least 1.
pub fn validate_positive(value: u32, field: &str) -> Result<(), AppError> {
    if value == 0 {
        return Err(AppError::validation(format!("{field} must be at least 1")));
    }
    Ok(())
}

// ── Domain payloads ─────────────────────────────────────────────────

/// Validate cart lines (order items or pre-ordered food).
pub fn validate_cart_items(items: &[CartItem], field: &str) -> Result<(), AppError> {
    for (i, item) in items.iter().enumerate() {
        validate_required_text(&item.name, &format!("{field}[{i}].name"), MAX_NAME_LEN)?;
        validate_amount(item.price, &format!("{field}[{i}].price"))?;
        validate_positive(item.quantity, &format!("{field}[{i}].quantity"))?;
        if item.image.len() > MAX_IMAGE_LEN {
            return Err(AppError::validation(format!("{field}[{i}].image is too large")));
        }
    }
    Ok(())
}

/// Validate selected floor-plan tables.
pub fn validate_selected_tables(tables: &[SelectedTable]) -> Result<(), AppError> {
    for (i, table) in tables.iter().enumerate() {
        validate_required_text(
            &table.table_number,
            &format!("selectedTables[{i}].tableNumber"),
            MAX_NAME_LEN,
        )?;
        validate_positive(table.capacity, &format!("selectedTables[{i}].capacity"))?;
    }
    Ok(())
}

/// Validate an order payload.
///
/// The total is only range-checked; it is never recomputed from the items.
pub fn validate_order_create(payload: &OrderCreate) -> Result<(), AppError> {
    validate_required_text(&payload.restaurant_id, "restaurantId", MAX_NAME_LEN)?;
    validate_required_text(&payload.restaurant_name, "restaurantName", MAX_NAME_LEN)?;

    if payload.items.is_empty() {
        return Err(AppError::validation("items must not be empty"));
    }
    validate_cart_items(&payload.items, "items")?;
    validate_amount(payload.total_price, "totalPrice")?;

    validate_optional_text(&payload.delivery_address, "deliveryAddress", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.pickup_time, "pickupTime", MAX_SHORT_TEXT_LEN)?;

    match payload.order_type {
        OrderType::Delivery if is_blank(&payload.delivery_address) => Err(AppError::validation(
            "deliveryAddress is required for delivery orders",
        )),
        OrderType::Pickup if is_blank(&payload.pickup_time) => Err(AppError::validation(
            "pickupTime is required for pickup orders",
        )),
        _ => Ok(()),
    }
}

/// Validate a reservation payload.
pub fn validate_reservation_create(payload: &ReservationCreate) -> Result<(), AppError> {
    validate_required_text(&payload.restaurant_id, "restaurantId", MAX_NAME_LEN)?;
    validate_required_text(&payload.restaurant_name, "restaurantName", MAX_NAME_LEN)?;
    validate_required_text(&payload.date, "date", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.time, "time", MAX_SHORT_TEXT_LEN)?;
    validate_positive(payload.duration, "duration")?;
    validate_positive(payload.people, "people")?;

    if let Some(tables) = &payload.selected_tables {
        validate_selected_tables(tables)?;
    }
    validate_cart_items(&payload.pre_ordered_food, "preOrderedFood")?;
    validate_amount(payload.total_price, "totalPrice")
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_item(name: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            name: name.into(),
            price,
            quantity,
            image: String::new(),
        }
    }

    fn order(order_type: OrderType) -> OrderCreate {
        OrderCreate {
            restaurant_id: "r1".into(),
            restaurant_name: "Bella Italia".into(),
            items: vec![cart_item("Bruschetta", 8.99, 2)],
            order_type,
            total_price: 17.98,
            delivery_address: None,
            pickup_time: None,
        }
    }

    fn reservation() -> ReservationCreate {
        ReservationCreate {
            restaurant_id: "r1".into(),
            restaurant_name: "Sushi Master".into(),
            date: "2026-10-20".into(),
            time: "19:00".into(),
            duration: 90,
            people: 4,
            selected_tables: None,
            total_capacity: None,
            pre_ordered_food: vec![],
            total_price: 0.0,
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("ok", "name", 10).is_ok());
        assert!(validate_required_text("   ", "name", 10).is_err());
        assert!(validate_required_text("01234567890", "name", 10).is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let accented = "é".repeat(150);
        assert!(validate_required_text(&accented, "restaurantName", MAX_NAME_LEN).is_ok());
        assert!(
            validate_optional_text(&Some(accented), "deliveryAddress", MAX_NAME_LEN).is_ok()
        );

        let err = validate_required_text(&"寿".repeat(201), "restaurantName", MAX_NAME_LEN)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: restaurantName is too long (201 chars, max 200)"
        );

        let mut payload = order(OrderType::DineIn);
        payload.restaurant_name = "é".repeat(150);
        assert!(validate_order_create(&payload).is_ok());
    }

    #[test]
    fn test_amount() {
        assert!(validate_amount(0.0, "totalPrice").is_ok());
        assert!(validate_amount(12.5, "totalPrice").is_ok());
        assert!(validate_amount(-0.01, "totalPrice").is_err());
        assert!(validate_amount(f64::NAN, "totalPrice").is_err());
        assert!(validate_amount(f64::INFINITY, "totalPrice").is_err());
    }

    #[test]
    fn test_dine_in_order_needs_no_address() {
        assert!(validate_order_create(&order(OrderType::DineIn)).is_ok());
    }

    #[test]
    fn test_delivery_requires_address() {
        let mut payload = order(OrderType::Delivery);
        assert!(validate_order_create(&payload).is_err());

        payload.delivery_address = Some("  ".into());
        assert!(validate_order_create(&payload).is_err());

        payload.delivery_address = Some("1 Main St".into());
        assert!(validate_order_create(&payload).is_ok());
    }

    #[test]
    fn test_pickup_requires_time() {
        let mut payload = order(OrderType::Pickup);
        assert!(validate_order_create(&payload).is_err());

        payload.pickup_time = Some("18:30".into());
        assert!(validate_order_create(&payload).is_ok());
    }

    #[test]
    fn test_order_items_rules() {
        let mut payload = order(OrderType::DineIn);
        payload.items.clear();
        let err = validate_order_create(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: items must not be empty");

        let mut payload = order(OrderType::DineIn);
        payload.items.push(cart_item("Tiramisu", 7.99, 0));
        let err = validate_order_create(&payload).unwrap_err();
        assert!(err.to_string().contains("items[1].quantity"));

        let mut payload = order(OrderType::DineIn);
        payload.items[0].price = -1.0;
        assert!(validate_order_create(&payload).is_err());
    }

    #[test]
    fn test_total_is_not_recomputed() {
        // A total that disagrees with the items is still accepted.
        let mut payload = order(OrderType::DineIn);
        payload.total_price = 1.0;
        assert!(validate_order_create(&payload).is_ok());
    }

    #[test]
    fn test_reservation_rules() {
        assert!(validate_reservation_create(&reservation()).is_ok());

        let mut payload = reservation();
        payload.people = 0;
        assert!(validate_reservation_create(&payload).is_err());

        let mut payload = reservation();
        payload.duration = 0;
        assert!(validate_reservation_create(&payload).is_err());

        let mut payload = reservation();
        payload.date = String::new();
        assert!(validate_reservation_create(&payload).is_err());
    }

    #[test]
    fn test_reservation_tables_and_food() {
        let mut payload = reservation();
        payload.selected_tables = Some(vec![SelectedTable {
            table_number: "T5".into(),
            capacity: 6,
        }]);
        payload.pre_ordered_food = vec![cart_item("Edamame", 5.99, 1)];
        payload.total_price = 5.99;
        assert!(validate_reservation_create(&payload).is_ok());

        payload.selected_tables = Some(vec![SelectedTable {
            table_number: "".into(),
            capacity: 2,
        }]);
        assert!(validate_reservation_create(&payload).is_err());
    }
}
