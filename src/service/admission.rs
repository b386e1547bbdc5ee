//! Location admission filter and admin-override verification.
//!
//! [`admit`] is a pure function: given the claimed coordinate, the target
//! park, and whether an override was granted, it either passes or returns
//! the rejection reason. No I/O, deterministic.

use std::fmt;

use crate::domain::geo::{self, GeoPoint};
use crate::domain::park::Park;
use crate::error::GatewayError;

/// Capability for verifying an admin override code.
///
/// Kept as a trait so secret storage/rotation can change without touching
/// the admission logic.
pub trait OverrideVerifier: Send + Sync + fmt::Debug {
    /// Returns `true` if the presented code grants the location bypass.
    fn verify(&self, code: Option<&str>) -> bool;
}

/// Override verifier backed by a single shared secret from configuration.
#[derive(Clone)]
pub struct SharedSecretVerifier {
    code: String,
}

impl SharedSecretVerifier {
    /// Creates a verifier for the given shared secret.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl OverrideVerifier for SharedSecretVerifier {
    fn verify(&self, code: Option<&str>) -> bool {
        code == Some(self.code.as_str())
    }
}

// The secret must not end up in logs.
impl fmt::Debug for SharedSecretVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecretVerifier").finish_non_exhaustive()
    }
}

/// Decides whether a reservation request may proceed based on proximity
/// to the park's reference point.
///
/// With `override_granted` the request is admitted unconditionally and no
/// coordinate is required. Otherwise the coordinate must be present and
/// finite, and its great-circle distance to the park must not exceed
/// `radius_miles` (the boundary itself admits).
///
/// # Errors
///
/// - [`GatewayError::InvalidLocation`] when the coordinate is missing or
///   not a finite number.
/// - [`GatewayError::OutOfRange`] when the requester is too far away; the
///   error names the park and the threshold.
pub fn admit(
    location: Option<GeoPoint>,
    park: &Park,
    override_granted: bool,
    radius_miles: f64,
) -> Result<(), GatewayError> {
    if override_granted {
        return Ok(());
    }

    let location = location.ok_or_else(|| {
        GatewayError::InvalidLocation("latitude and longitude are required".to_string())
    })?;
    if !location.is_finite() {
        return Err(GatewayError::InvalidLocation(
            "latitude and longitude must be finite numbers".to_string(),
        ));
    }

    let distance = geo::distance_miles(location, park.location);
    if distance > radius_miles {
        return Err(GatewayError::OutOfRange {
            park: park.name.to_string(),
            radius_miles,
        });
    }

    Ok(())
}
