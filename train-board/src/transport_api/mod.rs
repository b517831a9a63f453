//! TransportAPI client.
//!
//! This module provides an HTTP client for the TransportAPI UK train
//! endpoints: the live departure board for a station and the per-service
//! timetable linked from each departure.
//!
//! Key characteristics of TransportAPI:
//! - Authentication is by `app_id`/`app_key` query parameters
//! - Times are "HH:MM" strings in UK local time, passed through untouched
//! - Timetable links on the board are absolute URLs

mod client;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TransportClient, TransportConfig};
pub use error::TransportError;
pub use types::{
    Board, Departure, DepartureList, LiveBoard, ServiceTimetable, Timetable, TimetableStop,
};
