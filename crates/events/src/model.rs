//! Event record model.
//!
//! Rows arrive from the events API as loosely shaped JSON: text fields may be
//! absent, coordinates may be missing or non-numeric, and `causes` is not
//! always an array. Decoding is lenient so one malformed row never aborts a
//! whole page load.

use serde::{Deserialize, Deserializer, Serialize};
use volo_geo::Coordinate;

/// A volunteer event as consumed by the discovery filter.
///
/// Owned by the events API, read-only here. Absent text fields decode to
/// empty strings; absent or non-numeric coordinates decode to `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventRecord {
    /// Opaque unique identifier, also the tie-break for distance ordering.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-text venue description, not the coordinate.
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    /// Category labels, e.g. "Environment", "Education".
    #[serde(default, deserialize_with = "lenient_strings")]
    pub causes: Vec<String>,
}

impl EventRecord {
    /// Returns the event's coordinate when both parts are present and finite.
    #[inline]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => {
                let coord = Coordinate::new(lat, lng);
                coord.is_finite().then_some(coord)
            }
            _ => None,
        }
    }
}

/// Decode an API response body into event records.
///
/// Rows that are not JSON objects are skipped rather than failing the batch.
///
/// # Errors
/// Returns [`crate::EventError::JsonError`] only when the body itself is not
/// a JSON array.
pub fn decode_events(body: &str) -> crate::Result<Vec<EventRecord>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(rows
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect())
}

/// Accepts a number, a numeric string, or anything else (mapped to None).
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

/// Accepts an array of strings, dropping non-string entries; anything else
/// decodes as empty.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
