//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1003,
///     "message": "invalid input: duration must be a positive number of minutes",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Admission  | 403 Forbidden             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Court code did not match the accepted `WL`/`WB` + 1–2 digit format.
    #[error("invalid court code: {0} (use format WL1-WL10 or WB1-WB10)")]
    InvalidCourt(String),

    /// Coordinates were missing or not usable when the location check applies.
    #[error("valid location data is required: {0}")]
    InvalidLocation(String),

    /// Requester is outside the admission radius of the park.
    #[error("you must be within {radius_miles} miles of {park}")]
    OutOfRange {
        /// Name of the park the reservation targets.
        park: String,
        /// Admission radius threshold in miles.
        radius_miles: f64,
    },

    /// Unparseable start time or non-positive duration.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Persistence layer failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidCourt(_) => 1001,
            Self::InvalidLocation(_) => 1002,
            Self::InvalidInput(_) => 1003,
            Self::OutOfRange { .. } => 2001,
            Self::Storage(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCourt(_) | Self::InvalidLocation(_) | Self::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::OutOfRange { .. } => StatusCode::FORBIDDEN,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 5xx detail goes to the operator log, never to the caller.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message,
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(
            GatewayError::InvalidCourt("XX1".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::InvalidLocation("missing".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::InvalidInput("bad time".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn out_of_range_maps_to_403() {
        let err = GatewayError::OutOfRange {
            park: "Wills Park".to_string(),
            radius_miles: 0.5,
        };
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.error_code(), 2001);
    }

    #[test]
    fn out_of_range_message_names_park_and_threshold() {
        let err = GatewayError::OutOfRange {
            park: "Wills Park".to_string(),
            radius_miles: 0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("Wills Park"));
        assert!(msg.contains("0.5"));
    }

    #[test]
    fn storage_maps_to_500() {
        let err = GatewayError::Storage("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
