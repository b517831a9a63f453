//! TransportAPI response DTOs.
//!
//! These types map directly to the TransportAPI JSON responses. Every
//! field is an `Option` because the API omits or nulls fields freely;
//! the rendering layer decides which absences are fatal.

use serde::Deserialize;

use crate::domain::{Crs, Stop};

/// Response from `/v3/uk/train/station/{code}/live.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveBoard {
    /// Board date, e.g. "2019-07-09".
    pub date: Option<String>,

    /// Board time, e.g. "08:00".
    pub time_of_day: Option<String>,

    /// When the request was served (ISO 8601 datetime).
    pub request_time: Option<String>,

    /// Human-readable name of the board station.
    pub station_name: Option<String>,

    /// CRS code of the board station.
    pub station_code: Option<String>,

    /// Departures, wrapped in an object with a single `all` list.
    pub departures: Option<DepartureList>,
}

impl LiveBoard {
    /// The departures in the order the provider listed them.
    pub fn departures(&self) -> &[Departure] {
        self.departures
            .as_ref()
            .and_then(|d| d.all.as_deref())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartureList {
    pub all: Option<Vec<Departure>>,
}

/// A scheduled train on the live board.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Departure {
    /// Schedule UID of the train, e.g. "C23294".
    pub train_uid: Option<String>,

    /// Operator ATOC code, e.g. "GW".
    pub operator: Option<String>,

    /// Operator name, e.g. "Great Western Railway".
    pub operator_name: Option<String>,

    /// Where the service starts.
    pub origin_name: Option<String>,

    /// Where the service terminates.
    pub destination_name: Option<String>,

    /// Platform at the board station.
    pub platform: Option<String>,

    /// Scheduled departure from the board station ("HH:MM").
    pub aimed_departure_time: Option<String>,

    /// Live estimate of departure from the board station ("HH:MM").
    pub expected_departure_time: Option<String>,

    /// e.g. "ON TIME", "LATE", "CANCELLED".
    pub status: Option<String>,

    pub best_departure_estimate_mins: Option<i64>,

    /// Link to the per-service timetable.
    pub service_timetable: Option<ServiceTimetable>,
}

impl Departure {
    /// Departure time to show: the live estimate, else the scheduled time.
    pub fn departure_time(&self) -> Option<&str> {
        present(&self.expected_departure_time).or_else(|| present(&self.aimed_departure_time))
    }

    /// URL of this service's timetable.
    pub fn timetable_url(&self) -> Option<&str> {
        self.service_timetable
            .as_ref()
            .and_then(|t| present(&t.id))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceTimetable {
    /// Despite the name, a fully-qualified URL.
    pub id: Option<String>,
}

/// Response from a service timetable URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Timetable {
    pub train_uid: Option<String>,
    pub stops: Option<Vec<TimetableStop>>,
}

/// A calling point in a service timetable.
///
/// The API sends many more fields (tiploc, aimed times, stop type...);
/// only these four are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimetableStop {
    pub station_code: Option<String>,
    pub station_name: Option<String>,
    pub expected_arrival_time: Option<String>,
    pub platform: Option<String>,
}

impl From<TimetableStop> for Stop {
    fn from(stop: TimetableStop) -> Self {
        Stop {
            station_code: stop.station_code,
            station_name: stop.station_name,
            expected_arrival_time: stop.expected_arrival_time,
            platform: stop.platform,
            on_route: false,
        }
    }
}

/// A live board together with the destination it was filtered by.
#[derive(Debug, Clone)]
pub struct Board {
    pub live: LiveBoard,
    pub destination_code: Crs,
    pub destination_name: String,
}

impl Board {
    pub fn departures(&self) -> &[Departure] {
        self.live.departures()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
