//! Persistence layer: the reservation store seam and its implementations.
//!
//! [`store::ReservationStore`] is the capability the service depends on.
//! The PostgreSQL implementation uses `sqlx::PgPool`; the in-memory
//! implementation backs tests and persistence-disabled deployments.

pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use memory::InMemoryReservationStore;
pub use postgres::PostgresReservationStore;
pub use store::ReservationStore;
