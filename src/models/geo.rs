//! Geographic point model.

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair in degrees.
///
/// Used transiently by the ETA estimator and carried by sites and drivers
/// for map display. No projection or geodesy beyond the great-circle
/// distance in [`crate::eta`] is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees (east positive).
    pub lon: f64,
    /// Latitude in degrees (north positive).
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a point from longitude and latitude in degrees.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}
