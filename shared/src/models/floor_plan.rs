//! Floor Plan Model
//!
//! 静态楼层图：每家餐厅返回同一套 8 张桌台布局（未持久化）。
//! 坐标系：x ∈ [0, 100]，y ∈ [0, 160]。

use serde::{Deserialize, Serialize};

/// Plan width in layout units
pub const PLAN_WIDTH: f64 = 100.0;
/// Plan height in layout units
pub const PLAN_HEIGHT: f64 = 160.0;

/// Table on the floor plan (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorTable {
    pub table_number: String,
    pub capacity: u32,
    pub x: f64,
    pub y: f64,
    pub available: bool,
}

/// Floor plan response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    pub restaurant_id: String,
    pub tables: Vec<FloorTable>,
}

impl FloorPlan {
    /// Fixed layout echoed for any restaurant id
    pub fn for_restaurant(restaurant_id: impl Into<String>) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            tables: default_tables(),
        }
    }
}

// (number, capacity, x, y, available)
const LAYOUT: [(&str, u32, f64, f64, bool); 8] = [
    ("T1", 2, 15.0, 20.0, true),
    ("T2", 2, 50.0, 20.0, true),
    ("T3", 4, 85.0, 20.0, false),
    ("T4", 4, 15.0, 70.0, true),
    ("T5", 6, 50.0, 70.0, true),
    ("T6", 4, 85.0, 70.0, true),
    ("T7", 8, 30.0, 130.0, true),
    ("T8", 2, 75.0, 130.0, false),
];

/// The static 8-table layout
pub fn default_tables() -> Vec<FloorTable> {
    LAYOUT
        .iter()
        .map(|&(number, capacity, x, y, available)| FloorTable {
            table_number: number.to_string(),
            capacity,
            x,
            y,
            available,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_layout_has_eight_unique_tables() {
        let tables = default_tables();
        assert_eq!(tables.len(), 8);
        let numbers: HashSet<_> = tables.iter().map(|t| t.table_number.as_str()).collect();
        assert_eq!(numbers.len(), 8);
        assert!(numbers.contains("T1"));
        assert!(numbers.contains("T8"));
    }

    #[test]
    fn test_tables_inside_plan_bounds() {
        for t in default_tables() {
            assert!((0.0..=PLAN_WIDTH).contains(&t.x), "{} x={}", t.table_number, t.x);
            assert!((0.0..=PLAN_HEIGHT).contains(&t.y), "{} y={}", t.table_number, t.y);
            assert!(t.capacity >= 1);
        }
    }

    #[test]
    fn test_same_layout_for_every_restaurant() {
        let a = FloorPlan::for_restaurant("a");
        let b = FloorPlan::for_restaurant("whatever-id");
        assert_eq!(a.tables, b.tables);
        assert_eq!(b.restaurant_id, "whatever-id");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(FloorPlan::for_restaurant("r1")).unwrap();
        assert_eq!(json["restaurantId"], "r1");
        assert_eq!(json["tables"][0]["tableNumber"], "T1");
        assert_eq!(json["tables"][0]["available"], true);
    }
}
