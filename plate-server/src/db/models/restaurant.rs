//! Restaurant Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::MenuCategory;
use surrealdb::RecordId;

/// Default opening hours when a document omits them
pub const DEFAULT_OPENING_HOURS: &str = "9:00 AM - 10:00 PM";

/// Restaurant document (餐厅)
///
/// Created only by the seeder; never mutated through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_key"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    pub cuisine: String,
    pub rating: f64,
    pub price_range: String,
    pub address: String,
    pub city: String,
    pub delivery_time: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub menu: Vec<MenuCategory>,
    #[serde(default = "default_opening_hours")]
    pub opening_hours: String,
    #[serde(default)]
    pub hero_image: Option<String>,
}

fn default_opening_hours() -> String {
    DEFAULT_OPENING_HOURS.to_string()
}

/// Restaurant list filters (query string)
///
/// `cuisine` of `"all"` or empty means no filter; empty `search` likewise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
}

impl RestaurantFilter {
    /// Lower-cased search term, if any
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Exact cuisine to match, if any
    pub fn cuisine_term(&self) -> Option<String> {
        self.cuisine
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != "all")
            .map(str::to_string)
    }

    /// In-process equivalent of the store-side filter
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        let search_ok = self.search_term().is_none_or(|term| {
            restaurant.name.to_lowercase().contains(&term)
                || restaurant.cuisine.to_lowercase().contains(&term)
        });
        let cuisine_ok = self
            .cuisine_term()
            .is_none_or(|cuisine| restaurant.cuisine == cuisine);
        search_ok && cuisine_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, cuisine: &str) -> Restaurant {
        Restaurant {
            id: None,
            name: name.into(),
            logo: String::new(),
            cuisine: cuisine.into(),
            rating: 4.5,
            price_range: "$$".into(),
            address: "1 Main St".into(),
            city: "New York".into(),
            delivery_time: "20-30 min".into(),
            latitude: 40.0,
            longitude: -73.0,
            menu: vec![],
            opening_hours: default_opening_hours(),
            hero_image: None,
        }
    }

    fn filter(search: Option<&str>, cuisine: Option<&str>) -> RestaurantFilter {
        RestaurantFilter {
            search: search.map(String::from),
            cuisine: cuisine.map(String::from),
        }
    }

    #[test]
    fn test_defaults_on_deserialize() {
        let json = serde_json::json!({
            "name": "Bella Italia",
            "cuisine": "Italian",
            "rating": 4.7,
            "priceRange": "$$",
            "address": "123 Main Street",
            "city": "New York",
            "deliveryTime": "25-35 min",
            "latitude": 40.758,
            "longitude": -73.9855
        });
        let r: Restaurant = serde_json::from_value(json).unwrap();
        assert_eq!(r.logo, "");
        assert_eq!(r.opening_hours, DEFAULT_OPENING_HOURS);
        assert!(r.menu.is_empty());
        assert!(r.hero_image.is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_or_cuisine() {
        let bella = restaurant("Bella Italia", "Italian");
        assert!(filter(Some("italian"), None).matches(&bella));
        assert!(filter(Some("BELLA"), None).matches(&bella));
        assert!(!filter(Some("sushi"), None).matches(&bella));
    }

    #[test]
    fn test_cuisine_all_or_empty_is_no_filter() {
        let bella = restaurant("Bella Italia", "Italian");
        assert!(filter(None, Some("all")).matches(&bella));
        assert!(filter(None, Some("")).matches(&bella));
        assert!(filter(None, Some("Italian")).matches(&bella));
        assert!(!filter(None, Some("italian")).matches(&bella));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let sushi = restaurant("Sushi Master", "Japanese");
        assert!(filter(Some("master"), Some("Japanese")).matches(&sushi));
        assert!(!filter(Some("master"), Some("Italian")).matches(&sushi));
    }

    #[test]
    fn test_serialized_fields_are_camel_case() {
        let json = serde_json::to_value(restaurant("Green Bowl", "Healthy")).unwrap();
        assert!(json.get("priceRange").is_some());
        assert!(json.get("openingHours").is_some());
        assert!(json.get("id").is_none());
    }
}
