//! TransportAPI client error types.

/// Errors from the TransportAPI HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error")]
    Http(#[source] reqwest::Error),

    /// Invalid or missing app_id/app_key
    #[error("unauthorized: check TRANSPORTAPPID and TRANSPORTAPPKEY")]
    Unauthorized,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", .body.as_deref().map(|b| format!(" (body: {b})")).unwrap_or_default())]
    Json {
        message: String,
        body: Option<String>,
    },
}

// Request URLs carry app_id/app_key in the query string, so they are
// stripped before the error can reach a log line or the terminal.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TransportError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = TransportError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value (body: <html>)"
        );

        let err = TransportError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }

    #[test]
    fn http_error_leaves_detail_to_source() {
        use std::error::Error as _;

        let cause = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = TransportError::from(cause);

        assert_eq!(err.to_string(), "HTTP error");
        let source = err.source().unwrap().to_string();
        assert!(!source.is_empty());
        assert_ne!(source, err.to_string());
    }
}
