//! Calling points and on-route tagging.

use super::Crs;

/// One calling point of a service, as used for rendering.
///
/// Every field except `on_route` comes straight from the timetable
/// response and may be absent. `on_route` is computed by [`tag_route`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stop {
    pub station_code: Option<String>,
    pub station_name: Option<String>,
    pub expected_arrival_time: Option<String>,
    pub platform: Option<String>,
    pub on_route: bool,
}

impl Stop {
    /// Name shown in the stop list; falls back to the code.
    pub fn display_name(&self) -> &str {
        self.station_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.station_code.as_deref())
            .unwrap_or("?")
    }

    pub fn is_at(&self, crs: Crs) -> bool {
        crs.matches(self.station_code.as_deref())
    }
}

/// Mark the stops lying between `origin` and `destination`, inclusive.
///
/// A single pass in the order given: reaching `origin` switches tagging
/// on, reaching `destination` tags that stop and switches it off again.
/// There is no lookahead, so a destination listed before the origin, or a
/// code listed twice, is tagged exactly as the pass encounters it. When
/// origin and destination are the same station only that stop is tagged.
///
/// Returns the number of stops tagged.
pub fn tag_route(stops: &mut [Stop], origin: Crs, destination: Crs) -> usize {
    let mut on_route = false;
    let mut tagged = 0;

    for stop in stops.iter_mut() {
        let at_origin = stop.is_at(origin);
        let at_destination = stop.is_at(destination);

        if at_origin {
            on_route = true;
        }
        stop.on_route = on_route || at_destination;
        if at_destination {
            on_route = false;
        }

        if stop.on_route {
            tagged += 1;
        }
    }

    tagged
}
