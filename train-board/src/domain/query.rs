//! The validated origin/destination pair for one board lookup.

use super::Crs;

/// Origin and destination of a departure board query, with display names.
///
/// Built once per invocation from validated input (see
/// [`StationDirectory::validate`](crate::stations::StationDirectory::validate))
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureQuery {
    origin: Crs,
    origin_name: String,
    destination: Crs,
    destination_name: String,
}

impl DepartureQuery {
    pub fn new(
        origin: Crs,
        origin_name: impl Into<String>,
        destination: Crs,
        destination_name: impl Into<String>,
    ) -> Self {
        Self {
            origin,
            origin_name: origin_name.into(),
            destination,
            destination_name: destination_name.into(),
        }
    }

    pub fn origin(&self) -> Crs {
        self.origin
    }

    pub fn origin_name(&self) -> &str {
        &self.origin_name
    }

    pub fn destination(&self) -> Crs {
        self.destination
    }

    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }
}
