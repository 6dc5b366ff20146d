//! Filter criteria held by the discovery UI.

use serde::{Deserialize, Serialize};
use volo_geo::{Coordinate, SINGAPORE};

use crate::{EventError, Result};

/// Default search radius in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// The transient filter state of the discovery screen.
///
/// Not persisted anywhere; the UI resets it to [`Default`] on remount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, description and
    /// location.
    #[serde(default)]
    pub search_query: String,
    /// Maximum distance from `origin` in kilometers.
    #[serde(default = "default_radius")]
    pub radius_km: f64,
    /// Selected category chips, in UI display order. Empty means "all".
    #[serde(default)]
    pub selected_categories: Vec<String>,
    /// Reference point for the radius filter, from geolocation or the
    /// Singapore fallback.
    #[serde(default = "default_origin")]
    pub origin: Coordinate,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS_KM
}

fn default_origin() -> Coordinate {
    SINGAPORE
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            radius_km: DEFAULT_RADIUS_KM,
            selected_categories: Vec::new(),
            origin: SINGAPORE,
        }
    }
}

impl FilterCriteria {
    /// Checks the criteria before handing them to the filter.
    ///
    /// The filter itself never fails; this is for surfacing bad input at the
    /// edge (a slider wired to the wrong unit, a geolocation giving NaN)
    /// instead of silently returning an empty result list.
    ///
    /// # Errors
    /// Returns [`EventError::InvalidCriteria`] when `radius_km` is not a
    /// positive finite number or `origin` is out of range.
    pub fn validate(&self) -> Result<()> {
        if !self.radius_km.is_finite() && self.radius_km != f64::INFINITY {
            return Err(EventError::InvalidCriteria(format!(
                "radius must be a number, got {}",
                self.radius_km
            )));
        }
        if self.radius_km <= 0.0 {
            return Err(EventError::InvalidCriteria(format!(
                "radius must be positive, got {}",
                self.radius_km
            )));
        }
        if !self.origin.is_finite() || !self.origin.is_valid() {
            return Err(EventError::InvalidCriteria(format!(
                "origin out of range: ({}, {})",
                self.origin.latitude, self.origin.longitude
            )));
        }
        Ok(())
    }
}
