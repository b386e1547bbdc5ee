//! The reservation record and its lifecycle status.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::court::CourtCode;

/// Lifecycle status of a reservation.
///
/// Creation is the only lifecycle transition: reservations are confirmed
/// at creation, never edited or cancelled, and implicitly expire once
/// their end instant passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// The only status ever produced.
    Confirmed,
}

impl ReservationStatus {
    /// Returns the lowercase wire/storage string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
        }
    }
}

/// A confirmed court reservation. Immutable after creation.
#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Requester name.
    pub name: String,
    /// Requester phone number, if provided.
    pub phone: Option<String>,
    /// Reserved court.
    pub court: CourtCode,
    /// Canonical `HH:MM` wall-clock start time as requested.
    pub start_time: String,
    /// Reservation length in minutes. Always positive.
    pub duration_minutes: u32,
    /// Lifecycle status. Always [`ReservationStatus::Confirmed`].
    pub status: ReservationStatus,
    /// Server-assigned creation instant.
    pub created_at: DateTime<Utc>,
    /// Absolute start instant, computed once at creation.
    pub start_at: DateTime<Utc>,
    /// Absolute end instant. Invariant: `end_at = start_at + duration`.
    pub end_at: DateTime<Utc>,
}

impl Reservation {
    /// Returns `true` if the reservation has not yet ended at `now`.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.end_at > now
    }
}
