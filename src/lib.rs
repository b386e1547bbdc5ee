//! # court-reserve-gateway
//!
//! REST API gateway for reserving time slots on public park courts.
//!
//! Non-admin requesters must be physically near the park: the gateway
//! computes the great-circle distance between the claimed coordinate and
//! the park's reference coordinate and rejects requests outside the
//! configured radius. Confirmed reservations are persisted and can be
//! listed ordered by end time while they are still active.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ReservationService (service/)
//!     │     ├── admission filter + override verifier
//!     │     └── civil-time scheduling
//!     │
//!     ├── Domain types (domain/): parks, courts, geo, clock
//!     │
//!     └── ReservationStore (persistence/): PostgreSQL or in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
