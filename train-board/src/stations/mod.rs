//! Station code validation and name lookup.
//!
//! Provides the CRS code → station name mapping, loaded once at startup
//! from a CSV reference table (bundled with the crate by default).

mod directory;
mod error;

pub use directory::StationDirectory;
pub use error::{Role, StationError};
