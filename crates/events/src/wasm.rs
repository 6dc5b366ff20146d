//! WASM bindings for the events crate.
//!
//! JSON-string entry points for the browser host: the discovery screen hands
//! the raw API response plus its filter state across the boundary and gets a
//! filtered JSON array back.

use volo_geo::Coordinate;
use wasm_bindgen::prelude::*;

use crate::{decode_events, filter_events_owned, FilterCriteria};

/// Filter events with the given criteria.
///
/// # Arguments
/// * `events_json` - JSON array of event rows as returned by the events API
/// * `criteria_json` - JSON object with `search_query`, `radius_km`,
///   `selected_categories` and `origin`; missing fields take UI defaults
///
/// # Returns
/// JSON array of the events that pass, in input order.
#[wasm_bindgen]
pub fn filter_events(events_json: &str, criteria_json: &str) -> Result<String, JsValue> {
    let events = decode_events(events_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let criteria: FilterCriteria = serde_json::from_str(criteria_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
    criteria
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let results = filter_events_owned(&events, &criteria);

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Distinct cause labels for the category chips, in first-seen order.
///
/// # Arguments
/// * `events_json` - JSON array of event rows
///
/// # Returns
/// JSON array of category strings.
#[wasm_bindgen]
pub fn unique_categories(events_json: &str) -> Result<String, JsValue> {
    let events = decode_events(events_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let categories = crate::unique_categories(&events);

    serde_json::to_string(&categories)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Events within a radius, sorted nearest-first with distances attached.
///
/// # Arguments
/// * `user_lat` - User's latitude
/// * `user_lng` - User's longitude
/// * `events_json` - JSON array of event rows
/// * `radius_km` - Maximum distance in kilometers
///
/// # Returns
/// JSON array of `{id, distance}` rows.
#[wasm_bindgen]
pub fn events_within_radius(
    user_lat: f64,
    user_lng: f64,
    events_json: &str,
    radius_km: f64,
) -> Result<String, JsValue> {
    let events = decode_events(events_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let origin = Coordinate::new(user_lat, user_lng);
    let results = crate::events_within_radius(&origin, &events, radius_km);

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
