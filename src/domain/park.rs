//! Static reference set of parks and their coordinates.
//!
//! Parks are a hardcoded, read-only catalog; they are not persisted or
//! administered through the API.

use super::geo::GeoPoint;

/// A public park with courts that can be reserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Park {
    /// Display name, also used in out-of-range error messages.
    pub name: &'static str,
    /// Reference coordinate the admission radius is measured from.
    pub location: GeoPoint,
}

/// Wills Park (court family `WL`).
pub const WILLS_PARK: Park = Park {
    name: "Wills Park",
    location: GeoPoint::new(34.077107, -84.295352),
};

/// Webb Bridge Park (court family `WB`).
pub const WEBB_BRIDGE_PARK: Park = Park {
    name: "Webb Bridge Park",
    location: GeoPoint::new(34.067_200_686_567_65, -84.218_487_675_235_15),
};

/// All parks served by this gateway.
pub const PARKS: [Park; 2] = [WILLS_PARK, WEBB_BRIDGE_PARK];
