//! Domain layer: parks, courts, coordinates, reservations, and time.
//!
//! These types carry the business rules that do not depend on transport
//! or storage: court code validation, park resolution, great-circle
//! distance, and the immutable reservation record.

pub mod clock;
pub mod court;
pub mod geo;
pub mod park;
pub mod reservation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use court::{CourtCode, CourtFamily};
pub use geo::GeoPoint;
pub use park::Park;
pub use reservation::{Reservation, ReservationStatus};
