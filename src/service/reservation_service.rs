//! Reservation service: orchestrates admission, scheduling, and storage.

use std::sync::Arc;

use chrono_tz::Tz;
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::court::CourtCode;
use crate::domain::geo::GeoPoint;
use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::error::GatewayError;
use crate::persistence::store::ReservationStore;
use crate::service::admission::{self, OverrideVerifier};
use crate::service::schedule;

/// A reservation request as received from the API layer, not yet validated.
#[derive(Debug, Clone)]
pub struct NewReservation {
    /// Requester name.
    pub name: String,
    /// Requester phone number, if provided.
    pub phone: Option<String>,
    /// Raw court code string.
    pub court: String,
    /// Raw `HH:MM` start time string.
    pub start_time: String,
    /// Requested duration in minutes.
    pub duration_minutes: i64,
    /// Admin override code, if presented.
    pub admin_code: Option<String>,
    /// Claimed requester coordinate, if provided.
    pub location: Option<GeoPoint>,
}

/// Orchestration layer for reservation operations.
///
/// Every creation follows the pattern: validate court → verify override →
/// admission filter → resolve interval → persist → log. All validation
/// happens before the store is touched, so a failed request never leaves
/// a partial write behind.
#[derive(Debug, Clone)]
pub struct ReservationService {
    store: Arc<dyn ReservationStore>,
    clock: Arc<dyn Clock>,
    verifier: Arc<dyn OverrideVerifier>,
    zone: Tz,
    radius_miles: f64,
}

impl ReservationService {
    /// Creates a new `ReservationService`.
    #[must_use]
    pub fn new(
        store: Arc<dyn ReservationStore>,
        clock: Arc<dyn Clock>,
        verifier: Arc<dyn OverrideVerifier>,
        zone: Tz,
        radius_miles: f64,
    ) -> Self {
        Self {
            store,
            clock,
            verifier,
            zone,
            radius_miles,
        }
    }

    /// Returns the civil zone wall-clock times are interpreted in.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Admits, schedules, and persists a reservation.
    ///
    /// No conflict detection is performed against existing reservations on
    /// the same court; creation is a single append.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] for an invalid court code, a failed
    /// location check, an unparseable time or non-positive duration, or a
    /// storage failure.
    pub async fn create(&self, request: NewReservation) -> Result<Reservation, GatewayError> {
        let court = CourtCode::parse(&request.court)?;
        let park = court.park();

        let override_granted = self.verifier.verify(request.admin_code.as_deref());
        admission::admit(request.location, &park, override_granted, self.radius_miles)?;

        let now = self.clock.now();
        let interval =
            schedule::resolve_interval(&request.start_time, request.duration_minutes, self.zone, now)?;

        // resolve_interval guarantees a positive duration.
        let duration_minutes = u32::try_from(request.duration_minutes)
            .map_err(|_| GatewayError::InvalidInput("duration is too large".to_string()))?;

        let reservation = Reservation {
            id: Uuid::new_v4(),
            name: request.name,
            phone: request.phone,
            court,
            start_time: interval.start_time_string(),
            duration_minutes,
            status: ReservationStatus::Confirmed,
            created_at: now,
            start_at: interval.start_at,
            end_at: interval.end_at,
        };

        self.store.insert(reservation.clone()).await?;

        tracing::info!(
            court = %reservation.court,
            start = %reservation.start_at,
            duration_minutes = reservation.duration_minutes,
            admin_override = override_granted,
            "reservation confirmed"
        );

        Ok(reservation)
    }

    /// Returns all confirmed reservations that have not yet ended,
    /// ascending by end instant.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Storage`] on a persistence failure.
    pub async fn list_active(&self) -> Result<Vec<Reservation>, GatewayError> {
        let now = self.clock.now();
        self.store.list_active(now).await
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use chrono_tz::America::New_York;
    use crate::domain::clock::FixedClock;
    use crate::persistence::memory::InMemoryReservationStore;
    use crate::service::admission::SharedSecretVerifier;

    const OVERRIDE_CODE: &str = "91210";

    fn instant(s: &str) -> DateTime<Utc> {
        let Ok(dt) = s.parse::<DateTime<Utc>>() else {
            panic!("bad test instant {s}");
        };
        dt
    }

    // 14:00 in New York (EDT) on 2026-08-25.
    fn make_service() -> ReservationService {
        ReservationService::new(
            Arc::new(InMemoryReservationStore::new()),
            Arc::new(FixedClock(instant("2026-08-25T18:00:00Z"))),
            Arc::new(SharedSecretVerifier::new(OVERRIDE_CODE)),
            New_York,
            0.5,
        )
    }

    fn admin_request(court: &str, start_time: &str, duration: i64) -> NewReservation {
        NewReservation {
            name: "Mike".to_string(),
            phone: Some("555-0100".to_string()),
            court: court.to_string(),
            start_time: start_time.to_string(),
            duration_minutes: duration,
            admin_code: Some(OVERRIDE_CODE.to_string()),
            location: None,
        }
    }

    #[tokio::test]
    async fn admin_override_create_then_list_round_trips() {
        let service = make_service();

        let created = service.create(admin_request("wl3", "15:00", 60)).await;
        let Ok(created) = created else {
            panic!("creation should succeed: {created:?}");
        };
        assert_eq!(created.court.as_str(), "WL3");
        assert_eq!(created.status, ReservationStatus::Confirmed);
        assert_eq!(
            created.end_at - created.start_at,
            chrono::Duration::minutes(60)
        );

        let Ok(listed) = service.list_active().await else {
            panic!("list should succeed");
        };
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].court.as_str(), "WL3");
        assert_eq!(listed[0].start_time, "15:00");
        assert_eq!(listed[0].duration_minutes, 60);
    }

    #[tokio::test]
    async fn far_away_requester_without_code_is_rejected() {
        let service = make_service();
        let request = NewReservation {
            admin_code: None,
            // ~10 miles from Wills Park.
            location: Some(GeoPoint::new(34.222, -84.295352)),
            ..admin_request("WL1", "15:00", 60)
        };

        let result = service.create(request).await;
        assert!(matches!(result, Err(GatewayError::OutOfRange { .. })));

        let Ok(listed) = service.list_active().await else {
            panic!("list should succeed");
        };
        assert!(listed.is_empty(), "rejected request must not be persisted");
    }

    #[tokio::test]
    async fn nearby_requester_without_code_is_admitted() {
        let service = make_service();
        let request = NewReservation {
            admin_code: None,
            location: Some(GeoPoint::new(34.0772, -84.2954)),
            ..admin_request("WL2", "16:00", 30)
        };

        assert!(service.create(request).await.is_ok());
    }

    #[tokio::test]
    async fn missing_location_without_code_is_rejected() {
        let service = make_service();
        let request = NewReservation {
            admin_code: None,
            location: None,
            ..admin_request("WL1", "15:00", 60)
        };

        let result = service.create(request).await;
        assert!(matches!(result, Err(GatewayError::InvalidLocation(_))));
    }

    #[tokio::test]
    async fn negative_duration_is_rejected() {
        let service = make_service();
        let result = service.create(admin_request("WL1", "15:00", -5)).await;
        assert!(matches!(result, Err(GatewayError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn malformed_court_is_rejected_before_anything_else() {
        let service = make_service();
        let result = service.create(admin_request("XX3", "15:00", 60)).await;
        assert!(matches!(result, Err(GatewayError::InvalidCourt(_))));
    }

    #[tokio::test]
    async fn list_is_ordered_by_end_and_excludes_expired() {
        let service = make_service();

        // Ends 16:30 ET.
        let Ok(_) = service.create(admin_request("WL1", "15:30", 60)).await else {
            panic!("create should succeed");
        };
        // Ends 15:30 ET — earlier end despite later creation.
        let Ok(_) = service.create(admin_request("WB2", "15:00", 30)).await else {
            panic!("create should succeed");
        };
        // Ended 09:00 ET, before the clock's 14:00 ET; must be filtered.
        let Ok(_) = service.create(admin_request("WL9", "08:00", 60)).await else {
            panic!("create should succeed");
        };

        let Ok(listed) = service.list_active().await else {
            panic!("list should succeed");
        };
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].court.as_str(), "WB2");
        assert_eq!(listed[1].court.as_str(), "WL1");
        assert!(listed.windows(2).all(|w| w[0].end_at <= w[1].end_at));

        let now = instant("2026-08-25T18:00:00Z");
        assert!(listed.iter().all(|r| r.end_at > now));
    }

    #[tokio::test]
    async fn same_court_and_time_can_be_booked_twice() {
        // Overlap detection is deliberately absent; see DESIGN notes.
        let service = make_service();
        let Ok(_) = service.create(admin_request("WL5", "15:00", 60)).await else {
            panic!("first create should succeed");
        };
        assert!(service.create(admin_request("WL5", "15:00", 60)).await.is_ok());

        let Ok(listed) = service.list_active().await else {
            panic!("list should succeed");
        };
        assert_eq!(listed.len(), 2);
    }
}
