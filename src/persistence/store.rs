//! Store trait for reservation persistence.
//!
//! The trait is the seam between the service and storage, allowing the
//! PostgreSQL store to be swapped for an in-memory fake via dependency
//! injection.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::reservation::Reservation;
use crate::error::GatewayError;

/// Append-mostly collection of reservation records.
///
/// Insertion is a single append with no read-modify-write step, so
/// implementations need no transactions or compare-and-swap; concurrent
/// inserts are ordered only by the store's own write ordering.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single store can serve all
/// request handlers.
#[async_trait]
pub trait ReservationStore: Send + Sync + fmt::Debug {
    /// Appends a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Storage`] on a persistence failure.
    async fn insert(&self, reservation: Reservation) -> Result<(), GatewayError>;

    /// Returns confirmed reservations with `end_at > now`, ascending by
    /// `end_at`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Storage`] on a persistence failure.
    async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<Reservation>, GatewayError>;
}
