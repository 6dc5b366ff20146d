//! Event discovery filtering for the Volo volunteer marketplace.
//!
//! This crate provides:
//! - Lenient decoding of event rows from the events API
//! - Combined text / radius / category filtering
//! - Distance annotation and nearest-first ordering for the map view
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use volo_events::{filter_events, EventRecord, FilterCriteria};
//!
//! let events = vec![EventRecord {
//!     id: "ev-1".into(),
//!     name: "Beach Cleanup".into(),
//!     latitude: Some(1.3521),
//!     longitude: Some(103.8198),
//!     causes: vec!["Environment".into()],
//!     ..Default::default()
//! }];
//!
//! let criteria = FilterCriteria {
//!     search_query: "beach".into(),
//!     ..Default::default()
//! };
//!
//! let visible = filter_events(&events, &criteria);
//! assert_eq!(visible.len(), 1);
//! ```

mod model;
mod criteria;
mod filter;
mod distance;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use model::{decode_events, EventRecord};
pub use criteria::{FilterCriteria, DEFAULT_RADIUS_KM};
pub use filter::{
    filter_events, filter_events_owned, matches, matches_categories, matches_text,
    unique_categories, within_radius,
};
pub use distance::{event_distances, events_within_radius, nearest_events, EventDistance};
pub use error::{EventError, EventErrorCode, Result};
