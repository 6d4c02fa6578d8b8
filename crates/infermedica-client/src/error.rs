//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A closed-set value did not match any of its tokens.
    #[error("unexpected value for {field}: {value:?}")]
    UnexpectedValue {
        /// Name of the enumerated type.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A request failed local validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request builder only speaks GET and POST.
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with something other than 200 OK.
    #[error("{}", api_error_text(.status_line, .message.as_deref()))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Status line, e.g. `400 Bad Request`.
        status_line: String,
        /// Message from the error envelope, if the body carried one.
        message: Option<String>,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a config file.
    #[error("failed to read config file '{path}': {source}")]
    ReadConfig {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse a TOML config.
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),
}

fn api_error_text(status_line: &str, message: Option<&str>) -> String {
    match message {
        Some(message) if !message.is_empty() => format!("{}: {}", status_line, message),
        _ => status_line.to_string(),
    }
}

impl Error {
    /// Check if the error was raised locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::UnexpectedValue { .. } | Error::InvalidArgument(_))
    }

    /// HTTP status of a protocol error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api { status: 429, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Check if the transport gave up waiting.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error envelope returned by the API on non-200 responses.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_with_message() {
        let err = Error::Api {
            status: 400,
            status_line: "400 Bad Request".to_string(),
            message: Some("invalid age".to_string()),
        };
        assert_eq!(err.to_string(), "400 Bad Request: invalid age");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_api_error_without_message() {
        let err = Error::Api {
            status: 500,
            status_line: "500 Internal Server Error".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "500 Internal Server Error");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_unexpected_value_display() {
        let err = Error::UnexpectedValue {
            field: "Sex",
            value: "other".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected value for Sex: \"other\"");
        assert!(err.is_validation());
    }

    #[test]
    fn test_status_classification() {
        let api = |status: u16| Error::Api {
            status,
            status_line: status.to_string(),
            message: None,
        };
        assert!(api(404).is_not_found());
        assert!(api(401).is_auth_error());
        assert!(api(403).is_auth_error());
        assert!(api(429).is_rate_limited());
        assert!(!api(429).is_validation());
    }
}
