//! TransportAPI HTTP client.
//!
//! Two calls are made: the live board for the origin station, filtered to
//! trains calling at the destination, then one timetable fetch per train.
//! Nothing is retried; any failure is returned to the caller.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::credentials::Credentials;
use crate::domain::{Crs, DepartureQuery, Stop, tag_route};

use super::error::TransportError;
use super::types::{Board, LiveBoard, Timetable};

/// Default base URL for TransportAPI.
pub const DEFAULT_BASE_URL: &str = "https://transportapi.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unparseable body to keep in the error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the TransportAPI client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// app_id/app_key sent with every board request
    pub credentials: Credentials,
    /// Base URL for the API (defaults to production TransportAPI)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TransportConfig {
    /// Create a new config with the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// TransportAPI client for live boards and service timetables.
#[derive(Debug, Clone)]
pub struct TransportClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl TransportClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            credentials: config.credentials,
        })
    }

    /// Fetch the live departure board at the query's origin, restricted to
    /// trains calling at its destination.
    pub async fn fetch_departures(&self, query: &DepartureQuery) -> Result<Board, TransportError> {
        let origin = query.origin();
        let destination = query.destination();
        let url = format!("{}/v3/uk/train/station/{origin}/live.json", self.base_url);

        debug!(%url, %origin, calling_at = %destination, "fetching live departures");

        let request = self.http.get(&url).query(&[
            ("app_id", self.credentials.app_id.as_str()),
            ("app_key", self.credentials.app_key.as_str()),
            ("station_code", origin.as_str()),
            ("calling_at", destination.as_str()),
            ("type", "departure"),
        ]);

        let live: LiveBoard = self.send(request).await?;
        debug!(departures = live.departures().len(), "received live board");
        // Timetable links embed the credentials; log everything else.
        for departure in live.departures() {
            debug!(
                train = departure.train_uid.as_deref().unwrap_or("-"),
                departs = departure.departure_time().unwrap_or("-"),
                platform = departure.platform.as_deref().unwrap_or("-"),
                destination = departure.destination_name.as_deref().unwrap_or("-"),
                status = departure.status.as_deref().unwrap_or("-"),
                "departure"
            );
        }

        Ok(Board {
            live,
            destination_code: destination,
            destination_name: query.destination_name().to_string(),
        })
    }

    /// Fetch a service timetable and tag the stops between `origin` and
    /// `destination`.
    ///
    /// `timetable_url` is taken verbatim from the live board; it already
    /// carries whatever query parameters the API wants.
    pub async fn fetch_stops(
        &self,
        timetable_url: &str,
        origin: Crs,
        destination: Crs,
    ) -> Result<Vec<Stop>, TransportError> {
        // The query string can carry credentials, so only the path is logged.
        let path = timetable_url.split('?').next().unwrap_or_default();
        debug!(url = path, "fetching service timetable");

        let timetable: Timetable = self.send(self.http.get(timetable_url)).await?;

        let mut stops: Vec<Stop> = timetable
            .stops
            .unwrap_or_default()
            .into_iter()
            .map(Stop::from)
            .collect();
        let on_route = tag_route(&mut stops, origin, destination);

        debug!(
            train = timetable.train_uid.as_deref().unwrap_or("-"),
            stops = stops.len(),
            on_route,
            "received timetable"
        );
        debug!(?stops, "timetable stops");

        Ok(stops)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, TransportError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TransportError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        trace!(%body, "response body");

        serde_json::from_str(&body).map_err(|e| TransportError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("test-id", "test-key")
    }

    #[test]
    fn config_builder() {
        let config = TransportConfig::new(credentials())
            .with_base_url("http://localhost:8080/")
            .with_timeout(5);

        assert_eq!(config.credentials.app_id, "test-id");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = TransportConfig::new(credentials());

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn client_creation() {
        let client = TransportClient::new(TransportConfig::new(credentials()));
        assert!(client.is_ok());
    }

    // Request/response behaviour is covered against a mock server in
    // tests/wiremock_tests.rs.
}
