//! Demo data seeder
//!
//! 启动时 (监听端口之前) 按 [`SeedPolicy`] 写入 4 家演示餐厅。

use std::fmt;
use std::str::FromStr;

use shared::models::{MenuCategory, MenuItem};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::models::Restaurant;
use super::repository::{RepoResult, RestaurantRepository};

/// Startup seeding policy (`SEED_POLICY`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Insert the fixture only if the restaurant table is empty
    #[default]
    Preserve,
    /// Delete all restaurants, then insert the fixture
    Fresh,
    /// Do nothing
    Skip,
}

impl SeedPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SeedPolicy::Preserve => "preserve",
            SeedPolicy::Fresh => "fresh",
            SeedPolicy::Skip => "skip",
        }
    }
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown seed policy value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown seed policy '{0}' (expected preserve, fresh or skip)")]
pub struct InvalidSeedPolicy(pub String);

impl FromStr for SeedPolicy {
    type Err = InvalidSeedPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(SeedPolicy::Preserve),
            "fresh" => Ok(SeedPolicy::Fresh),
            "skip" => Ok(SeedPolicy::Skip),
            _ => Err(InvalidSeedPolicy(s.to_string())),
        }
    }
}

/// Apply the seed policy, returning how many restaurants were inserted
pub async fn seed_restaurants(db: Surreal<Any>, policy: SeedPolicy) -> RepoResult<usize> {
    let repo = RestaurantRepository::new(db);

    match policy {
        SeedPolicy::Skip => {
            tracing::info!("Seeding skipped (policy=skip)");
            return Ok(0);
        }
        SeedPolicy::Preserve => {
            let existing = repo.count().await?;
            if existing > 0 {
                tracing::info!(existing, "Restaurants already present, seeding skipped");
                return Ok(0);
            }
        }
        SeedPolicy::Fresh => {
            let existing = repo.count().await?;
            if existing > 0 {
                tracing::warn!(
                    existing,
                    "Fresh seed replaces existing restaurants; stored orders and reservations keep their old restaurant ids"
                );
            }
            let inserted = repo.replace_all(demo_restaurants()).await?;
            tracing::info!(inserted, policy = %policy, "Seeded demo restaurants");
            return Ok(inserted);
        }
    }

    let inserted = repo.insert_many(demo_restaurants()).await?.len();
    tracing::info!(inserted, policy = %policy, "Seeded demo restaurants");
    Ok(inserted)
}

// ========== Fixture ==========

fn item(name: &str, description: &str, price: f64) -> MenuItem {
    MenuItem::new(name, description, price)
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    name: &str,
    cuisine: &str,
    rating: f64,
    price_range: &str,
    address: &str,
    delivery_time: &str,
    (latitude, longitude): (f64, f64),
    opening_hours: &str,
    menu: Vec<MenuCategory>,
) -> Restaurant {
    Restaurant {
        id: None,
        name: name.to_string(),
        logo: String::new(),
        cuisine: cuisine.to_string(),
        rating,
        price_range: price_range.to_string(),
        address: address.to_string(),
        city: "New York".to_string(),
        delivery_time: delivery_time.to_string(),
        latitude,
        longitude,
        menu,
        opening_hours: opening_hours.to_string(),
        hero_image: None,
    }
}

/// The four demo restaurants with their menus
pub fn demo_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            "Bella Italia",
            "Italian",
            4.7,
            "$$",
            "123 Main Street",
            "25-35 min",
            (40.7580, -73.9855),
            "11:00 AM - 11:00 PM",
            vec![
                MenuCategory::new(
                    "Appetizers",
                    vec![
                        item("Bruschetta", "Grilled bread with tomatoes and basil", 8.99),
                        item("Caprese Salad", "Fresh mozzarella, tomatoes, and basil", 10.99),
                    ],
                ),
                MenuCategory::new(
                    "Pasta",
                    vec![
                        item("Spaghetti Carbonara", "Creamy pasta with bacon and parmesan", 16.99),
                        item("Fettuccine Alfredo", "Rich cream sauce with parmesan", 15.99),
                        item("Penne Arrabbiata", "Spicy tomato sauce with garlic", 14.99),
                    ],
                ),
                MenuCategory::new(
                    "Pizza",
                    vec![
                        item("Margherita Pizza", "Classic tomato, mozzarella, and basil", 13.99),
                        item("Pepperoni Pizza", "Pepperoni and mozzarella", 15.99),
                        item("Quattro Formaggi", "Four cheese blend", 17.99),
                    ],
                ),
                MenuCategory::new(
                    "Desserts",
                    vec![
                        item("Tiramisu", "Coffee-flavored Italian dessert", 7.99),
                        item("Panna Cotta", "Creamy vanilla dessert", 6.99),
                    ],
                ),
            ],
        ),
        restaurant(
            "Sushi Master",
            "Japanese",
            4.8,
            "$$$",
            "456 Park Avenue",
            "30-40 min",
            (40.7614, -73.9776),
            "12:00 PM - 10:30 PM",
            vec![
                MenuCategory::new(
                    "Appetizers",
                    vec![
                        item("Edamame", "Steamed soybeans with sea salt", 5.99),
                        item("Gyoza", "Pan-fried dumplings", 7.99),
                        item("Miso Soup", "Traditional Japanese soup", 3.99),
                    ],
                ),
                MenuCategory::new(
                    "Sushi Rolls",
                    vec![
                        item("California Roll", "Crab, avocado, cucumber", 9.99),
                        item("Spicy Tuna Roll", "Tuna with spicy mayo", 11.99),
                        item("Dragon Roll", "Eel, cucumber, avocado", 14.99),
                        item("Rainbow Roll", "Assorted fish on California roll", 15.99),
                    ],
                ),
                MenuCategory::new(
                    "Sashimi",
                    vec![
                        item("Salmon Sashimi", "6 pieces of fresh salmon", 13.99),
                        item("Tuna Sashimi", "6 pieces of fresh tuna", 14.99),
                        item("Mixed Sashimi", "12 pieces assorted", 24.99),
                    ],
                ),
                MenuCategory::new(
                    "Main Dishes",
                    vec![
                        item("Chicken Teriyaki", "Grilled chicken with teriyaki sauce", 16.99),
                        item("Beef Teriyaki", "Grilled beef with teriyaki sauce", 19.99),
                    ],
                ),
            ],
        ),
        restaurant(
            "Burger Junction",
            "American",
            4.5,
            "$",
            "789 Broadway",
            "15-25 min",
            (40.7505, -73.9934),
            "10:00 AM - 11:00 PM",
            vec![
                MenuCategory::new(
                    "Burgers",
                    vec![
                        item("Classic Burger", "Beef patty, lettuce, tomato, pickles", 9.99),
                        item("Cheeseburger", "Classic burger with cheese", 10.99),
                        item("Bacon Burger", "Burger with crispy bacon", 11.99),
                        item("Double Deluxe", "Two patties, cheese, bacon", 14.99),
                    ],
                ),
                MenuCategory::new(
                    "Sides",
                    vec![
                        item("French Fries", "Crispy golden fries", 3.99),
                        item("Onion Rings", "Beer-battered onion rings", 4.99),
                        item("Sweet Potato Fries", "Sweet and crispy", 4.99),
                        item("Coleslaw", "Fresh cabbage salad", 2.99),
                    ],
                ),
                MenuCategory::new(
                    "Drinks",
                    vec![
                        item("Soft Drink", "Coke, Sprite, Fanta", 2.49),
                        item("Milkshake", "Chocolate, Vanilla, Strawberry", 5.99),
                        item("Fresh Juice", "Orange or Apple", 3.99),
                    ],
                ),
                MenuCategory::new(
                    "Desserts",
                    vec![
                        item("Apple Pie", "Warm apple pie with ice cream", 5.99),
                        item("Brownie Sundae", "Chocolate brownie with ice cream", 6.99),
                    ],
                ),
            ],
        ),
        restaurant(
            "Green Bowl",
            "Healthy",
            4.6,
            "$$",
            "321 5th Avenue",
            "20-30 min",
            (40.7489, -73.9680),
            "8:00 AM - 9:00 PM",
            vec![
                MenuCategory::new(
                    "Salads",
                    vec![
                        item("Caesar Salad", "Romaine, parmesan, croutons", 10.99),
                        item("Greek Salad", "Tomato, cucumber, feta, olives", 11.99),
                        item("Quinoa Bowl", "Quinoa, vegetables, tahini", 12.99),
                    ],
                ),
                MenuCategory::new(
                    "Bowls",
                    vec![
                        item("Buddha Bowl", "Mixed grains, roasted vegetables", 13.99),
                        item("Poke Bowl", "Fresh fish, rice, vegetables", 15.99),
                        item("Grain Bowl", "Brown rice, avocado, greens", 12.99),
                    ],
                ),
                MenuCategory::new(
                    "Smoothies",
                    vec![
                        item("Green Machine", "Spinach, banana, mango", 6.99),
                        item("Berry Blast", "Mixed berries, yogurt", 7.99),
                        item("Tropical Paradise", "Pineapple, coconut, banana", 7.99),
                    ],
                ),
                MenuCategory::new(
                    "Wraps",
                    vec![
                        item("Chicken Wrap", "Grilled chicken, vegetables", 9.99),
                        item("Falafel Wrap", "Falafel, hummus, vegetables", 8.99),
                    ],
                ),
            ],
        ),
    ]
}
