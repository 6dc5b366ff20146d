//! Combined text / radius / category filtering.
//!
//! The host UI re-runs [`filter_events`] whenever the query, radius, category
//! selection, origin, or the event list itself changes. The function is pure:
//! same inputs, same output, same order.

use volo_geo::haversine_distance;

use crate::{EventRecord, FilterCriteria};

/// Returns true when the event passes all three predicates.
#[inline]
pub fn matches(event: &EventRecord, criteria: &FilterCriteria) -> bool {
    matches_text(event, &criteria.search_query)
        && within_radius(event, criteria)
        && matches_categories(event, &criteria.selected_categories)
}

/// Case-insensitive substring match against name, description and location.
///
/// An empty query matches everything. Absent fields decode as empty strings,
/// so a partial record never fails this predicate with an error.
pub fn matches_text(event: &EventRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    event.name.to_lowercase().contains(&query)
        || event.description.to_lowercase().contains(&query)
        || event.location.to_lowercase().contains(&query)
}

/// Radius predicate against the criteria's origin.
///
/// Events with a missing or non-finite coordinate are excluded. The product
/// behavior is that an event without a location never appears in
/// radius-filtered results, so the exclusion is explicit here rather than a
/// NaN comparison quietly evaluating false.
pub fn within_radius(event: &EventRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.origin.is_finite() {
        return false;
    }
    match event.coordinate() {
        Some(coord) => haversine_distance(&criteria.origin, &coord) <= criteria.radius_km,
        None => false,
    }
}

/// Category predicate: empty selection matches everything, otherwise the
/// event's causes must intersect the selection.
pub fn matches_categories(event: &EventRecord, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    event.causes.iter().any(|cause| selected.contains(cause))
}

/// Applies the combined predicate, preserving input order.
///
/// The result borrows from `events`; records are never cloned or mutated.
pub fn filter_events<'a>(events: &'a [EventRecord], criteria: &FilterCriteria) -> Vec<&'a EventRecord> {
    events.iter().filter(|event| matches(event, criteria)).collect()
}

/// Owned variant of [`filter_events`] for callers that cannot hold borrows,
/// such as the wasm boundary.
pub fn filter_events_owned(events: &[EventRecord], criteria: &FilterCriteria) -> Vec<EventRecord> {
    events
        .iter()
        .filter(|event| matches(event, criteria))
        .cloned()
        .collect()
}

/// Collects distinct cause labels for the category chips, preserving
/// first-seen order.
pub fn unique_categories(events: &[EventRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut categories = Vec::new();
    for event in events {
        for cause in &event.causes {
            if seen.insert(cause.clone()) {
                categories.push(cause.clone());
            }
        }
    }
    categories
}
