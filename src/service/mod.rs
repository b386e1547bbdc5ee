//! Service layer: admission filtering, scheduling, and orchestration.

pub mod admission;
pub mod reservation_service;
pub mod schedule;

pub use admission::{OverrideVerifier, SharedSecretVerifier};
pub use reservation_service::{NewReservation, ReservationService};
