//! PostgreSQL implementation of the reservation store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::models::ReservationRow;
use super::store::ReservationStore;
use crate::domain::reservation::Reservation;
use crate::error::GatewayError;

/// PostgreSQL-backed reservation store using `sqlx::PgPool`.
///
/// Schema lives in `migrations/`; the index on `(status, end_at)` serves
/// the active-reservation query.
#[derive(Debug, Clone)]
pub struct PostgresReservationStore {
    pool: PgPool,
}

impl PostgresReservationStore {
    /// Creates a store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for PostgresReservationStore {
    async fn insert(&self, reservation: Reservation) -> Result<(), GatewayError> {
        let row = ReservationRow::try_from(&reservation)?;

        sqlx::query(
            "INSERT INTO reservations \
             (id, name, phone, court, start_time, duration_minutes, status, created_at, start_at, end_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.phone)
        .bind(&row.court)
        .bind(&row.start_time)
        .bind(row.duration_minutes)
        .bind(&row.status)
        .bind(row.created_at)
        .bind(row.start_at)
        .bind(row.end_at)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<Reservation>, GatewayError> {
        let rows = sqlx::query_as::<
            _,
            (
                Uuid,
                String,
                Option<String>,
                String,
                String,
                i32,
                String,
                DateTime<Utc>,
                DateTime<Utc>,
                DateTime<Utc>,
            ),
        >(
            "SELECT id, name, phone, court, start_time, duration_minutes, status, created_at, start_at, end_at \
             FROM reservations \
             WHERE status = 'confirmed' AND end_at > $1 \
             ORDER BY end_at ASC",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Storage(e.to_string()))?;

        rows.into_iter()
            .map(
                |(
                    id,
                    name,
                    phone,
                    court,
                    start_time,
                    duration_minutes,
                    status,
                    created_at,
                    start_at,
                    end_at,
                )| {
                    Reservation::try_from(ReservationRow {
                        id,
                        name,
                        phone,
                        court,
                        start_time,
                        duration_minutes,
                        status,
                        created_at,
                        start_at,
                        end_at,
                    })
                },
            )
            .collect()
    }
}
