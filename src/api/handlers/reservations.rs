//! Reservation handlers: create and list.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{ActiveReservationDto, CreateReservationRequest};
use crate::app_state::AppState;
use crate::domain::geo::GeoPoint;
use crate::error::{ErrorResponse, GatewayError};
use crate::service::NewReservation;

/// `POST /reservations` — Reserve a court time slot.
///
/// # Errors
///
/// Returns [`GatewayError`] on an invalid court code, failed location
/// check, unparseable time, non-positive duration, or storage failure.
#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    summary = "Reserve a court",
    description = "Validates the court code, checks that the requester is within the admission radius of the park (unless a valid admin override code is presented), anchors the HH:MM start time to today in the parks' civil zone, and persists the reservation.",
    request_body = CreateReservationRequest,
    responses(
        (status = 200, description = "Reservation confirmed", body = String),
        (status = 400, description = "Malformed body or invalid court, location, time, or duration", body = ErrorResponse),
        (status = 403, description = "Requester outside the admission radius", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    // A body that does not deserialize (wrong types included) is invalid
    // input, not a transport-level concern.
    let Json(req) = payload.map_err(|e| GatewayError::InvalidInput(e.body_text()))?;

    // Only a complete pair counts as a claimed location; a lone lat or lng
    // is treated as missing and rejected by the admission filter.
    let location = match (req.lat, req.lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
        _ => None,
    };

    state
        .reservation_service
        .create(NewReservation {
            name: req.name,
            phone: req.phone,
            court: req.court,
            start_time: req.start_time,
            duration_minutes: req.duration,
            admin_code: req.admin_code,
            location,
        })
        .await?;

    Ok((StatusCode::OK, "Reservation confirmed."))
}

/// `GET /reservations` — List active reservations ordered by end time.
///
/// # Errors
///
/// Returns [`GatewayError::Storage`] on a persistence failure.
#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    summary = "List active reservations",
    description = "Returns confirmed reservations whose end instant has not yet passed, ascending by end instant, each annotated with civil-zone renderings of its start and end.",
    responses(
        (status = 200, description = "Active reservations", body = Vec<ActiveReservationDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let zone = state.reservation_service.zone();
    let reservations = state.reservation_service.list_active().await?;

    let body: Vec<ActiveReservationDto> = reservations
        .iter()
        .map(|r| ActiveReservationDto::from_reservation(r, zone))
        .collect();

    Ok(Json(body))
}

/// Reservation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/reservations",
        post(create_reservation).get(list_reservations),
    )
}
