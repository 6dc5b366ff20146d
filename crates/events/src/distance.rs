//! Distance annotation for the map view.
//!
//! The map screen shows events ordered nearest-first with their distance from
//! the user. Events without a usable coordinate get `f64::INFINITY` so they
//! sort last instead of disappearing from the annotated list.

use serde::{Deserialize, Serialize};
use volo_geo::{haversine_distance, Coordinate};

use crate::EventRecord;

/// Distance from the origin to a single event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDistance {
    /// The event ID
    pub id: String,
    /// Calculated distance in kilometers (Infinity if the event has no
    /// usable coordinate)
    pub distance: f64,
}

/// Calculate distances from the origin to every event, in input order.
pub fn event_distances(origin: &Coordinate, events: &[EventRecord]) -> Vec<EventDistance> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        events
            .par_iter()
            .map(|event| single_distance(origin, event))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        events
            .iter()
            .map(|event| single_distance(origin, event))
            .collect()
    }
}

/// Distances sorted nearest-first, ties broken by event ID.
///
/// # Arguments
/// * `origin` - Reference point
/// * `events` - Events to annotate
/// * `max_results` - Maximum number of results to return (None for all)
pub fn nearest_events(
    origin: &Coordinate,
    events: &[EventRecord],
    max_results: Option<usize>,
) -> Vec<EventDistance> {
    let mut results = event_distances(origin, events);
    sort_by_distance(&mut results);

    if let Some(max) = max_results {
        results.truncate(max);
    }

    results
}

/// Distances within `radius_km`, sorted nearest-first.
///
/// Events without a coordinate carry infinite distance and are always
/// outside any finite radius.
pub fn events_within_radius(
    origin: &Coordinate,
    events: &[EventRecord],
    radius_km: f64,
) -> Vec<EventDistance> {
    let mut results = event_distances(origin, events);
    results.retain(|r| r.distance.is_finite() && r.distance <= radius_km);
    sort_by_distance(&mut results);
    results
}

fn sort_by_distance(results: &mut [EventDistance]) {
    results.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[inline]
fn single_distance(origin: &Coordinate, event: &EventRecord) -> EventDistance {
    let distance = event
        .coordinate()
        .map(|coord| haversine_distance(origin, &coord))
        .unwrap_or(f64::INFINITY);

    EventDistance {
        id: event.id.clone(),
        distance,
    }
}
