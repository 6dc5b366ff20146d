//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::{Coordinate, GeoError, Result};

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Uses the Haversine formula. If either coordinate is non-finite the result
/// is NaN; callers that need a deterministic error should use
/// [`try_haversine_distance`] instead.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in kilometers
///
/// # Example
/// ```
/// use volo_geo::{haversine_distance, Coordinate};
///
/// let singapore = Coordinate::new(1.3521, 103.8198);
/// let marina_bay = Coordinate::new(1.2897, 103.8501);
///
/// let distance = haversine_distance(&singapore, &marina_bay);
/// assert!(distance > 5.0 && distance < 9.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in meters
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

/// Checked distance calculation that rejects non-finite coordinates.
///
/// NaN propagated into a radius comparison is always false, which silently
/// drops the record being compared. This variant surfaces that case as
/// [`GeoError::InvalidCoordinate`] so the caller excludes it deliberately.
///
/// # Errors
/// Returns [`GeoError::InvalidCoordinate`] when either endpoint has a NaN
/// or infinite component.
pub fn try_haversine_distance(from: &Coordinate, to: &Coordinate) -> Result<f64> {
    if !from.is_finite() {
        return Err(GeoError::InvalidCoordinate(format!(
            "non-finite origin: ({}, {})",
            from.latitude, from.longitude
        )));
    }
    if !to.is_finite() {
        return Err(GeoError::InvalidCoordinate(format!(
            "non-finite target: ({}, {})",
            to.latitude, to.longitude
        )));
    }
    Ok(haversine_distance(from, to))
}

/// Internal function that calculates distance with a custom radius.
#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test data: known distances between points
    const SINGAPORE: Coordinate = Coordinate { latitude: 1.3521, longitude: 103.8198 };
    const MARINA_BAY: Coordinate = Coordinate { latitude: 1.2897, longitude: 103.8501 };
    const JURONG_EAST: Coordinate = Coordinate { latitude: 1.3329, longitude: 103.7436 };
    const KUALA_LUMPUR: Coordinate = Coordinate { latitude: 3.1390, longitude: 101.6869 };

    #[test]
    fn test_singapore_to_marina_bay() {
        let distance = haversine_distance(&SINGAPORE, &MARINA_BAY);
        // Expected: ~7.7 km
        assert!(distance > 5.0 && distance < 9.0, "SG-Marina Bay: {}", distance);
    }

    #[test]
    fn test_singapore_to_kuala_lumpur() {
        let distance = haversine_distance(&SINGAPORE, &KUALA_LUMPUR);
        // Expected: ~310 km
        assert!(distance > 300.0 && distance < 320.0, "SG-KL: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        let distance = haversine_distance(&SINGAPORE, &SINGAPORE);
        assert!(distance.abs() < 0.001);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine_distance(&SINGAPORE, &JURONG_EAST);
        let d2 = haversine_distance(&JURONG_EAST, &SINGAPORE);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_meters_conversion() {
        let km = haversine_distance(&SINGAPORE, &MARINA_BAY);
        let meters = haversine_distance_meters(&SINGAPORE, &MARINA_BAY);
        assert!((meters - km * 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_checked_distance_ok() {
        let distance = try_haversine_distance(&SINGAPORE, &MARINA_BAY).unwrap();
        assert!(distance > 5.0 && distance < 9.0);
    }

    #[test]
    fn test_checked_distance_rejects_nan() {
        let bad = Coordinate::new(f64::NAN, 103.8198);
        let err = try_haversine_distance(&SINGAPORE, &bad).unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate(_)));
    }

    #[test]
    fn test_checked_distance_rejects_infinite_origin() {
        let bad = Coordinate::new(f64::INFINITY, 0.0);
        assert!(try_haversine_distance(&bad, &SINGAPORE).is_err());
    }

    #[test]
    fn test_unchecked_distance_propagates_nan() {
        let bad = Coordinate::new(f64::NAN, 103.8198);
        let distance = haversine_distance(&SINGAPORE, &bad);
        assert!(distance.is_nan());
        // NaN comparisons are always false, which is the silent-exclusion
        // behavior the checked variant exists to make explicit.
        assert!(!(distance <= 10.0));
    }
}
