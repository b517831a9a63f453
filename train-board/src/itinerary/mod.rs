//! Departure board rendering.
//!
//! Turns a live board plus one timetable per train into the printed
//! itinerary: a ruled header, then for each train a two-line summary
//! followed by the names of the stops on the travelled segment.

mod error;
mod format;

pub use error::LookupError;
pub use format::{header_line, render_departure, render_header, render_stop_names};

use tracing::info;

use crate::Error;
use crate::domain::DepartureQuery;
use crate::transport_api::TransportClient;

/// Fetch the board for `query`, then each train's timetable in turn, and
/// render the whole itinerary.
///
/// Requests are made one after another (one for the board, one per
/// train). Any failure aborts the run; nothing is returned for the trains
/// that did render.
pub async fn render_itinerary(
    client: &TransportClient,
    query: &DepartureQuery,
) -> Result<String, Error> {
    let board = client.fetch_departures(query).await?;
    info!(trains = board.departures().len(), "rendering itinerary");

    let mut out = render_header(query, &board.live);

    for departure in board.departures() {
        let url = departure
            .timetable_url()
            .ok_or_else(|| LookupError::MissingField {
                train: format::train_id(departure).to_string(),
                field: "timetable link",
            })?;

        let stops = client
            .fetch_stops(url, query.origin(), board.destination_code)
            .await?;

        out.push_str(&render_departure(departure, &stops, query)?);
        out.push_str(&render_stop_names(&stops));
    }

    Ok(out)
}
