//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu item (菜品)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            image: String::new(),
        }
    }
}

/// Named menu section with ordered items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(category: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            category: category.into(),
            items,
        }
    }
}
