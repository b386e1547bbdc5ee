//! System endpoints: health check and the static park catalog.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::court::CourtFamily;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Park catalog entry.
#[derive(Debug, Serialize, ToSchema)]
struct ParkInfo {
    family: &'static str,
    park: &'static str,
    lat: f64,
    lng: f64,
}

/// `GET /config/parks` — List the parks served by this gateway.
#[utoipa::path(
    get,
    path = "/config/parks",
    tag = "System",
    summary = "List served parks",
    description = "Returns the static catalog of parks: court code family prefix, park name, and reference coordinate.",
    responses(
        (status = 200, description = "Park catalog", body = Vec<ParkInfo>),
    )
)]
pub async fn parks_handler() -> impl IntoResponse {
    let parks: Vec<ParkInfo> = [CourtFamily::Wills, CourtFamily::WebbBridge]
        .into_iter()
        .map(|family| {
            let park = family.park();
            ParkInfo {
                family: family.prefix(),
                park: park.name,
                lat: park.location.lat,
                lng: park.location.lng,
            }
        })
        .collect();
    (StatusCode::OK, Json(parks))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/parks", get(parks_handler))
}
