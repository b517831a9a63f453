//! Plain-text rendering of a departure board.

use crate::domain::{Crs, DepartureQuery, Stop};
use crate::transport_api::{Departure, LiveBoard};

use super::error::LookupError;

/// Shown in place of any optional value the API left out.
const MISSING: &str = "-";

/// The header line, without its rules.
///
/// `==== Trains from Reading (RDG) to London Paddington (PAD) 08:00 2019-07-09 ====`
pub fn header_line(query: &DepartureQuery, board: &LiveBoard) -> String {
    format!(
        "==== Trains from {} ({}) to {} ({}) {} {} ====",
        query.origin_name(),
        query.origin(),
        query.destination_name(),
        query.destination(),
        or_missing(&board.time_of_day),
        or_missing(&board.date),
    )
}

/// The header line between two `=` rules of the same width.
pub fn render_header(query: &DepartureQuery, board: &LiveBoard) -> String {
    let header = header_line(query, board);
    let rule = "=".repeat(header.chars().count());
    format!("{rule}\n{header}\n{rule}\n")
}

/// The two-line summary of one train: times and status, then the route.
///
/// Fails when the timetable has no stop at the origin or destination.
pub fn render_departure(
    departure: &Departure,
    stops: &[Stop],
    query: &DepartureQuery,
) -> Result<String, LookupError> {
    let train = train_id(departure);
    let departure_time = departure
        .departure_time()
        .ok_or_else(|| LookupError::MissingField {
            train: train.to_string(),
            field: "departure time",
        })?;

    let source = find_stop(stops, query.origin(), train)?;
    let dest = find_stop(stops, query.destination(), train)?;
    let on_route = stops.iter().filter(|s| s.on_route).count();

    Ok(format!(
        "{} {} -> {} {} => {}\n\
         \tTrain {} ({}) from {} arriving at {} on platform {} going to {} platform {}. {} stops:\n",
        query.origin(),
        departure_time,
        query.destination(),
        or_missing(&dest.expected_arrival_time),
        or_missing(&departure.status),
        train,
        or_missing(&departure.operator),
        or_missing(&departure.origin_name),
        query.origin_name(),
        or_missing(&source.platform),
        query.destination_name(),
        or_missing(&dest.platform),
        on_route,
    ))
}

/// The tab-indented, comma-joined names of the on-route stops.
pub fn render_stop_names(stops: &[Stop]) -> String {
    let names: Vec<&str> = stops
        .iter()
        .filter(|s| s.on_route)
        .map(Stop::display_name)
        .collect();
    format!("\t{}\n", names.join(","))
}

pub(crate) fn train_id(departure: &Departure) -> &str {
    departure
        .train_uid
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(MISSING)
}

/// First stop at `station`.
fn find_stop<'a>(stops: &'a [Stop], station: Crs, train: &str) -> Result<&'a Stop, LookupError> {
    stops
        .iter()
        .find(|s| s.is_at(station))
        .ok_or_else(|| LookupError::NoStop {
            train: train.to_string(),
            station,
        })
}

fn or_missing(value: &Option<String>) -> &str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING)
}
