//! Database row models for the `reservations` table.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::court::CourtCode;
use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::error::GatewayError;

/// A row from the `reservations` table.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationRow {
    /// Primary key.
    pub id: Uuid,
    /// Requester name.
    pub name: String,
    /// Requester phone number.
    pub phone: Option<String>,
    /// Canonical court code string.
    pub court: String,
    /// `HH:MM` wall-clock start time.
    pub start_time: String,
    /// Duration in minutes.
    pub duration_minutes: i32,
    /// Status string (`"confirmed"`).
    pub status: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Absolute start instant.
    pub start_at: DateTime<Utc>,
    /// Absolute end instant.
    pub end_at: DateTime<Utc>,
}

impl TryFrom<&Reservation> for ReservationRow {
    type Error = GatewayError;

    fn try_from(reservation: &Reservation) -> Result<Self, Self::Error> {
        // The column is INTEGER; a duration that does not fit cannot be
        // stored without breaking the end = start + duration invariant.
        let duration_minutes = i32::try_from(reservation.duration_minutes).map_err(|_| {
            GatewayError::Storage(format!(
                "duration {} minutes exceeds the storage range",
                reservation.duration_minutes
            ))
        })?;

        Ok(Self {
            id: reservation.id,
            name: reservation.name.clone(),
            phone: reservation.phone.clone(),
            court: reservation.court.as_str().to_string(),
            start_time: reservation.start_time.clone(),
            duration_minutes,
            status: reservation.status.as_str().to_string(),
            created_at: reservation.created_at,
            start_at: reservation.start_at,
            end_at: reservation.end_at,
        })
    }
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = GatewayError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        let court = CourtCode::parse(&row.court)
            .map_err(|_| GatewayError::Storage(format!("corrupt court code in row {}", row.id)))?;

        let status = match row.status.as_str() {
            "confirmed" => ReservationStatus::Confirmed,
            other => {
                return Err(GatewayError::Storage(format!(
                    "unknown reservation status {other:?} in row {}",
                    row.id
                )));
            }
        };

        let duration_minutes = u32::try_from(row.duration_minutes)
            .map_err(|_| GatewayError::Storage(format!("negative duration in row {}", row.id)))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            court,
            start_time: row.start_time,
            duration_minutes,
            status,
            created_at: row.created_at,
            start_at: row.start_at,
            end_at: row.end_at,
        })
    }
}
