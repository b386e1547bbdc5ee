//! Reservation DTOs for the create and list operations.
//!
//! Wire field names (`startTime`, `adminCode`, `startTimeET`, ...) are part
//! of the published contract and are kept stable via serde renames.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::reservation::Reservation;

/// Request body for `POST /api/v1/reservations`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    /// Requester name.
    pub name: String,
    /// Requester phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Court code, e.g. `WL3` or `WB10` (case-insensitive).
    pub court: String,
    /// Wall-clock start time, `HH:MM` 24-hour, interpreted on today's
    /// date in the parks' civil zone.
    #[serde(rename = "startTime")]
    pub start_time: String,
    /// Duration in minutes. Must be a positive integer.
    pub duration: i64,
    /// Admin override code; a matching code bypasses the location check.
    #[serde(default, rename = "adminCode")]
    pub admin_code: Option<String>,
    /// Claimed requester latitude in decimal degrees.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Claimed requester longitude in decimal degrees.
    #[serde(default)]
    pub lng: Option<f64>,
}

/// One element of the `GET /api/v1/reservations` response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActiveReservationDto {
    /// Canonical court code.
    pub court: String,
    /// Wall-clock `HH:MM` start time.
    #[serde(rename = "startTime")]
    pub start_time: String,
    /// Duration in minutes.
    pub duration: u32,
    /// Absolute start instant.
    #[serde(rename = "startTimestamp")]
    pub start_timestamp: DateTime<Utc>,
    /// Absolute end instant.
    #[serde(rename = "endTimestamp")]
    pub end_timestamp: DateTime<Utc>,
    /// ISO-8601 start time rendered in the parks' civil zone. The field
    /// name predates configurable zones and is kept for wire compatibility.
    #[serde(rename = "startTimeET")]
    pub start_time_et: String,
    /// ISO-8601 end time rendered in the parks' civil zone.
    #[serde(rename = "endTimeET")]
    pub end_time_et: String,
}

impl ActiveReservationDto {
    /// Builds the wire representation of a reservation, annotating the
    /// absolute instants with civil-zone renderings for display.
    #[must_use]
    pub fn from_reservation(reservation: &Reservation, zone: Tz) -> Self {
        Self {
            court: reservation.court.as_str().to_string(),
            start_time: reservation.start_time.clone(),
            duration: reservation.duration_minutes,
            start_timestamp: reservation.start_at,
            end_timestamp: reservation.end_at,
            start_time_et: reservation.start_at.with_timezone(&zone).to_rfc3339(),
            end_time_et: reservation.end_at.with_timezone(&zone).to_rfc3339(),
        }
    }
}
