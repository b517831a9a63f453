//! Live UK train departures between two stations.
//!
//! Looks up the trains leaving one station that call at another, fetches
//! each train's timetable, and renders a plain-text itinerary with
//! platforms, status and the stops in between.

pub mod credentials;
pub mod domain;
mod error;
pub mod itinerary;
pub mod stations;
pub mod transport_api;

pub use error::Error;
