/*
[INPUT]:  Error sources (validation, HTTP transport, payload parsing)
[OUTPUT]: Structured error types shared by every resource module
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the RongCloud client
#[derive(Error, Debug)]
pub enum RongCloudError {
    /// A documented required parameter was empty; raised before any network call
    #[error("parameter \"{0}\" is required")]
    MissingParameter(&'static str),

    /// The server answered with an empty body
    #[error("bad request: empty response body")]
    BadRequest,

    /// HTTP request failed (network, TLS, timeout, non-2xx status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A caller-supplied JSON document could not be parsed
    #[error("invalid JSON payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Base URL rejected at construction
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Credential could not be carried as an HTTP header value
    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl RongCloudError {
    /// Check whether the error was raised before reaching the network
    pub fn is_validation_error(&self) -> bool {
        matches!(self, RongCloudError::MissingParameter(_))
    }

    /// The parameter named by a missing-parameter error, if any
    pub fn missing_parameter(&self) -> Option<&'static str> {
        match self {
            RongCloudError::MissingParameter(name) => Some(*name),
            _ => None,
        }
    }
}

/// Result type alias for RongCloud operations
pub type Result<T> = std::result::Result<T, RongCloudError>;
