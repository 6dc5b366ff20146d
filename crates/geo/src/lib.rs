//! Geospatial utilities for Volo event discovery.
//!
//! This crate provides:
//! - Haversine great-circle distance calculations
//! - A checked distance variant that rejects non-finite coordinates
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use volo_geo::{haversine_distance, Coordinate};
//!
//! let city_center = Coordinate::new(1.3521, 103.8198); // Singapore
//! let marina_bay = Coordinate::new(1.2897, 103.8501);
//!
//! let distance_km = haversine_distance(&city_center, &marina_bay);
//! assert!(distance_km > 5.0 && distance_km < 9.0);
//! ```

mod haversine;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use haversine::{
    haversine_distance, haversine_distance_meters, try_haversine_distance, EARTH_RADIUS_KM,
    EARTH_RADIUS_M,
};
pub use error::{GeoError, GeoErrorCode, Result};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

/// Fallback origin used when the host UI has no geolocation: Singapore city center.
pub const SINGAPORE: Coordinate = Coordinate {
    latitude: 1.3521,
    longitude: 103.8198,
};

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate is within valid degree ranges.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(1.3521, 103.8198);
        assert_eq!(coord.latitude, 1.3521);
        assert_eq!(coord.longitude, 103.8198);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn test_coordinate_finiteness() {
        assert!(Coordinate::new(1.3521, 103.8198).is_finite());
        assert!(!Coordinate::new(f64::NAN, 103.8198).is_finite());
        assert!(!Coordinate::new(1.3521, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (1.3521, 103.8198).into();
        assert_eq!(coord.latitude, 1.3521);
    }

    #[test]
    fn test_singapore_fallback_is_valid() {
        assert!(SINGAPORE.is_valid());
        assert!(SINGAPORE.is_finite());
    }
}
