//! Request and response DTOs for the REST API.

pub mod reservation_dto;

pub use reservation_dto::{ActiveReservationDto, CreateReservationRequest};
