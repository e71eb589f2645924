//! Reservation Repository

use super::{BaseRepository, LIST_LIMIT, RepoResult};
use crate::db::models::Reservation;
use crate::utils::id::new_record_key;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "reservation";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Newest reservations first
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM reservation ORDER BY createdAt DESC LIMIT {LIST_LIMIT}"
            ))
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Find reservation by record key
    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<Reservation>> {
        let reservation: Option<Reservation> =
            self.base.db().select((TABLE, key.to_string())).await?;
        Ok(reservation)
    }

    /// Persist a new reservation under a fresh key
    ///
    /// `None` if the store acknowledged the write without returning the record.
    pub async fn create(&self, mut reservation: Reservation) -> RepoResult<Option<Reservation>> {
        reservation.id = None;
        let created: Option<Reservation> = self
            .base
            .db()
            .create((TABLE, new_record_key()))
            .content(reservation)
            .await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::ReservationCreate;
    use crate::db::models::serde_helpers::record_key;
    use crate::db::repository::test_support::memory_db;
    use chrono::{Duration, Utc};
    use shared::models::{CartItem, SelectedTable};

    fn payload(date: &str) -> ReservationCreate {
        ReservationCreate {
            restaurant_id: "r2".into(),
            restaurant_name: "Sushi Master".into(),
            date: date.into(),
            time: "20:00".into(),
            duration: 90,
            people: 3,
            selected_tables: Some(vec![SelectedTable {
                table_number: "T4".into(),
                capacity: 4,
            }]),
            total_capacity: Some(4),
            pre_ordered_food: vec![CartItem {
                name: "Dragon Roll".into(),
                price: 14.99,
                quantity: 2,
                image: String::new(),
            }],
            total_price: 29.98,
        }
    }

    #[tokio::test]
    async fn test_create_keeps_payload_verbatim() {
        let repo = ReservationRepository::new(memory_db().await);
        let created = repo
            .create(payload("2026-10-20").into_reservation(Utc::now()))
            .await
            .unwrap()
            .unwrap();
        let key = record_key(created.id.as_ref().unwrap());

        let fetched = repo.find_by_id(&key).await.unwrap().unwrap();
        assert_eq!(fetched.pre_ordered_food, created.pre_ordered_food);
        assert_eq!(fetched.selected_tables, created.selected_tables);
        assert_eq!(fetched.total_price, 29.98);
        assert_eq!(fetched.qr_code, created.qr_code);
        assert_eq!(fetched.status, "upcoming");
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = ReservationRepository::new(memory_db().await);
        let base = Utc::now();
        repo.create(payload("older").into_reservation(base)).await.unwrap();
        repo.create(payload("newer").into_reservation(base + Duration::milliseconds(5)))
            .await
            .unwrap();

        let dates: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, ["newer", "older"]);
    }

    #[tokio::test]
    async fn test_missing_reservation_is_none() {
        let repo = ReservationRepository::new(memory_db().await);
        assert!(repo.find_by_id(&new_record_key()).await.unwrap().is_none());
    }
}
