//! Order Repository

use super::{BaseRepository, LIST_LIMIT, RepoResult};
use crate::db::models::Order;
use crate::utils::id::new_record_key;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Newest orders first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM order ORDER BY createdAt DESC LIMIT {LIST_LIMIT}"
            ))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by record key
    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select((TABLE, key.to_string())).await?;
        Ok(order)
    }

    /// Persist a new order under a fresh key
    ///
    /// `None` if the store acknowledged the write without returning the record.
    pub async fn create(&self, mut order: Order) -> RepoResult<Option<Order>> {
        order.id = None;
        let created: Option<Order> = self
            .base
            .db()
            .create((TABLE, new_record_key()))
            .content(order)
            .await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::OrderCreate;
    use crate::db::models::serde_helpers::record_key;
    use crate::db::repository::test_support::memory_db;
    use chrono::{Duration, Utc};
    use shared::models::{CartItem, OrderType};

    fn payload(name: &str) -> OrderCreate {
        OrderCreate {
            restaurant_id: "r1".into(),
            restaurant_name: name.into(),
            items: vec![CartItem {
                name: "Poke Bowl".into(),
                price: 15.99,
                quantity: 1,
                image: String::new(),
            }],
            order_type: OrderType::Pickup,
            total_price: 15.99,
            delivery_address: None,
            pickup_time: Some("12:30".into()),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch() {
        let repo = OrderRepository::new(memory_db().await);
        let created = repo
            .create(payload("Green Bowl").into_order(Utc::now()))
            .await
            .unwrap()
            .unwrap();
        let key = record_key(created.id.as_ref().unwrap());
        assert_eq!(key.len(), 32);

        let fetched = repo.find_by_id(&key).await.unwrap().unwrap();
        assert_eq!(fetched.restaurant_name, "Green Bowl");
        assert_eq!(fetched.order_type, OrderType::Pickup);
        assert_eq!(fetched.pickup_time.as_deref(), Some("12:30"));
        assert_eq!(fetched.created_at.timestamp_micros(), created.created_at.timestamp_micros());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = OrderRepository::new(memory_db().await);
        let base = Utc::now();
        repo.create(payload("first").into_order(base)).await.unwrap();
        repo.create(payload("third").into_order(base + Duration::seconds(2))).await.unwrap();
        repo.create(payload("second").into_order(base + Duration::seconds(1))).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.restaurant_name)
            .collect();
        assert_eq!(names, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_missing_order_is_none() {
        let repo = OrderRepository::new(memory_db().await);
        assert!(repo.find_by_id(&new_record_key()).await.unwrap().is_none());
    }
}
