//! Rendering error types.

use crate::domain::Crs;

/// A departure or timetable lacks data the itinerary cannot do without.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No calling point in the timetable matches an expected station
    #[error("train {train} has no stop at {station}")]
    NoStop { train: String, station: Crs },

    /// A required field is absent from the board response
    #[error("train {train} has no {field}")]
    MissingField { train: String, field: &'static str },
}
