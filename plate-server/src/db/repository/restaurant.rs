//! Restaurant Repository

use super::{BaseRepository, LIST_LIMIT, RepoError, RepoResult};
use crate::db::models::{Restaurant, RestaurantFilter};
use crate::utils::id::new_record_key;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::any::Any;

pub const TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find restaurants matching the filter, ordered by name
    pub async fn find_all(&self, filter: &RestaurantFilter) -> RepoResult<Vec<Restaurant>> {
        let search = filter.search_term();
        let cuisine = filter.cuisine_term();

        let mut conditions = Vec::new();
        if search.is_some() {
            conditions.push(
                "(string::lowercase(name) CONTAINS $search OR string::lowercase(cuisine) CONTAINS $search)",
            );
        }
        if cuisine.is_some() {
            conditions.push("cuisine = $cuisine");
        }

        let mut sql = String::from("SELECT * FROM restaurant");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(&format!(" ORDER BY name ASC LIMIT {LIST_LIMIT}"));

        let mut query = self.base.db().query(sql);
        if let Some(search) = search {
            query = query.bind(("search", search));
        }
        if let Some(cuisine) = cuisine {
            query = query.bind(("cuisine", cuisine));
        }

        let restaurants: Vec<Restaurant> = query.await?.take(0)?;
        Ok(restaurants)
    }

    /// Find restaurant by record key
    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<Restaurant>> {
        let restaurant: Option<Restaurant> =
            self.base.db().select((TABLE, key.to_string())).await?;
        Ok(restaurant)
    }

    /// Number of stored restaurants
    pub async fn count(&self) -> RepoResult<usize> {
        let count: Option<usize> = self
            .base
            .db()
            .query("SELECT count() AS count FROM restaurant GROUP ALL")
            .await?
            .take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Insert many restaurants in one statement, assigning fresh keys
    pub async fn insert_many(&self, restaurants: Vec<Restaurant>) -> RepoResult<Vec<Restaurant>> {
        let expected = restaurants.len();
        let created: Vec<Restaurant> = self
            .base
            .db()
            .insert(TABLE)
            .content(with_fresh_keys(restaurants))
            .await?;
        if created.len() != expected {
            return Err(RepoError::Database(format!(
                "Inserted {} of {expected} restaurants",
                created.len()
            )));
        }
        Ok(created)
    }

    /// Delete every restaurant and insert `restaurants` in one transaction
    ///
    /// A failed insert rolls the delete back. Returns the stored count.
    pub async fn replace_all(&self, restaurants: Vec<Restaurant>) -> RepoResult<usize> {
        self.replace_docs(with_fresh_keys(restaurants)).await
    }

    async fn replace_docs(&self, docs: Vec<Restaurant>) -> RepoResult<usize> {
        self.base
            .db()
            .query(
                "BEGIN TRANSACTION; \
                 DELETE restaurant; \
                 INSERT INTO restaurant $docs; \
                 COMMIT TRANSACTION;",
            )
            .bind(("docs", docs))
            .await?
            .check()?;
        self.count().await
    }
}

fn with_fresh_keys(restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
    restaurants
        .into_iter()
        .map(|mut r| {
            r.id = Some(RecordId::from_table_key(TABLE, new_record_key()));
            r
        })
        .collect()
}
