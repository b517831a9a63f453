//! Domain types for the departure board.
//!
//! Types here enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod query;
mod station;
mod stop;

pub use query::DepartureQuery;
pub use station::{Crs, InvalidCrs};
pub use stop::{Stop, tag_route};
