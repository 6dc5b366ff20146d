//! WASM bindings for the geo crate.
//!
//! These bindings allow the geo crate to be used from JavaScript/TypeScript
//! in both browser and Deno environments.

use crate::{haversine_distance, try_haversine_distance, Coordinate, SINGAPORE};
use wasm_bindgen::prelude::*;

/// Calculate distance between two coordinates.
///
/// # Arguments
/// * `lat1` - Latitude of first point
/// * `lng1` - Longitude of first point
/// * `lat2` - Latitude of second point
/// * `lng2` - Longitude of second point
///
/// # Returns
/// Distance in kilometers
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    haversine_distance(&from, &to)
}

/// Checked distance that rejects NaN or infinite inputs.
///
/// # Returns
/// Distance in kilometers, or a JS error when either point is non-finite.
#[wasm_bindgen]
pub fn checked_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<f64, JsValue> {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    try_haversine_distance(&from, &to).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Fallback origin for hosts without geolocation, as a `[lat, lng]` array.
#[wasm_bindgen]
pub fn default_origin() -> Vec<f64> {
    vec![SINGAPORE.latitude, SINGAPORE.longitude]
}
