//! In-memory reservation store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::store::ReservationStore;
use crate::domain::reservation::Reservation;
use crate::error::GatewayError;

/// Reservation store backed by a `tokio::sync::RwLock<Vec<_>>`.
///
/// Used when persistence is disabled and as the test double for the
/// service layer. Contents are lost on process exit.
#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    reservations: RwLock<Vec<Reservation>>,
}

impl InMemoryReservationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of stored reservations, active or not.
    pub async fn len(&self) -> usize {
        self.reservations.read().await.len()
    }

    /// Returns `true` if the store holds no reservations.
    pub async fn is_empty(&self) -> bool {
        self.reservations.read().await.is_empty()
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn insert(&self, reservation: Reservation) -> Result<(), GatewayError> {
        self.reservations.write().await.push(reservation);
        Ok(())
    }

    async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<Reservation>, GatewayError> {
        let reservations = self.reservations.read().await;
        let mut active: Vec<Reservation> = reservations
            .iter()
            .filter(|r| r.is_active(now))
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal end instants.
        active.sort_by_key(|r| r.end_at);
        Ok(active)
    }
}
