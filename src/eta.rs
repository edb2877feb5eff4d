//! Great-circle distance and travel-time estimation.
//!
//! Straight-line ("as the crow flies") estimates only — no road network,
//! traffic, or routing. Good enough for the dispatch board's at-a-glance
//! ETA next to each driver marker.

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};
use crate::models::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default assumed average road speed in km/h.
pub const DEFAULT_SPEED_KMH: f64 = 55.0;

/// A distance/ETA pair for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Great-circle distance in kilometers, rounded to one decimal place.
    pub distance_km: f64,
    /// Travel time at the assumed speed, rounded to the nearest minute.
    pub eta_minutes: u32,
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// Unrounded; display rounding happens in [`estimate`].
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let (lat1, lon1) = (from.lat.to_radians(), from.lon.to_radians());
    let (lat2, lon2) = (to.lat.to_radians(), to.lon.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Estimates distance and travel time between two points.
///
/// Stateless pure computation: distance is rounded to one decimal place,
/// ETA to the nearest whole minute (computed from the unrounded distance).
///
/// # Errors
/// [`DispatchError::InvalidInput`] if either point has a non-finite
/// coordinate or the speed is not a positive finite number.
pub fn estimate(from: GeoPoint, to: GeoPoint, speed_kmh: f64) -> DispatchResult<Estimate> {
    if !from.is_finite() || !to.is_finite() {
        return Err(DispatchError::invalid_input(
            "coordinates must be finite numbers",
        ));
    }
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return Err(DispatchError::invalid_input(
            "speed must be a positive finite number",
        ));
    }

    let distance_km = haversine_km(from, to);
    let eta_minutes = (distance_km / speed_kmh * 60.0).round() as u32;

    Ok(Estimate {
        distance_km: (distance_km * 10.0).round() / 10.0,
        eta_minutes,
    })
}

/// [`estimate`] at the default assumed speed.
pub fn estimate_default(from: GeoPoint, to: GeoPoint) -> DispatchResult<Estimate> {
    estimate(from, to, DEFAULT_SPEED_KMH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_same_point_is_zero() {
        let p = GeoPoint::new(-84.51, 39.10);
        let e = estimate(p, p, 55.0).expect("estimate");
        assert!((e.distance_km - 0.0).abs() < EPS);
        assert_eq!(e.eta_minutes, 0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // One degree of latitude along a meridian is ~111.19 km.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let d = haversine_km(a, b);
        assert!((d - 111.195).abs() < 0.01);

        let e = estimate(a, b, 55.0).expect("estimate");
        assert!((e.distance_km - 111.2).abs() < EPS);
        // 111.195 / 55 * 60 = 121.3 → 121
        assert_eq!(e.eta_minutes, 121);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(-84.51, 39.10);
        let b = GeoPoint::new(-83.00, 39.96);
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        assert!((ab - ba).abs() < EPS);

        let ea = estimate(a, b, 55.0).expect("estimate");
        let eb = estimate(b, a, 55.0).expect("estimate");
        assert!((ea.distance_km - eb.distance_km).abs() < EPS);
        assert_eq!(ea.eta_minutes, eb.eta_minutes);
    }

    #[test]
    fn test_eta_scales_with_speed() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let slow = estimate(a, b, 27.5).expect("estimate");
        let fast = estimate(a, b, 55.0).expect("estimate");
        assert!(slow.eta_minutes > fast.eta_minutes);
        // Halving the speed doubles the travel time (within a rounding minute).
        assert!((i64::from(slow.eta_minutes) - 2 * i64::from(fast.eta_minutes)).abs() <= 1);
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        let good = GeoPoint::new(-84.51, 39.10);
        let bad = GeoPoint::new(f64::NAN, 39.10);
        assert!(matches!(
            estimate(bad, good, 55.0),
            Err(DispatchError::InvalidInput(_))
        ));
        assert!(matches!(
            estimate(good, bad, 55.0),
            Err(DispatchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bad_speed_rejected() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        assert!(estimate(a, b, 0.0).is_err());
        assert!(estimate(a, b, -10.0).is_err());
        assert!(estimate(a, b, f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_speed() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let e = estimate_default(a, b).expect("estimate");
        let explicit = estimate(a, b, DEFAULT_SPEED_KMH).expect("estimate");
        assert_eq!(e, explicit);
    }
}
