//! Error types for WestFax API operations.

use thiserror::Error;

/// Errors that can occur during WestFax API operations.
#[derive(Debug, Error)]
pub enum WestfaxError {
    /// Configuration is missing or incomplete.
    #[error("WestFax configuration required: {0}")]
    ConfigMissing(String),

    /// A scalar-returning endpoint answered with an empty result list.
    #[error("{operation} returned no record for fax '{fax_id}'")]
    EmptyResult {
        operation: &'static str,
        fax_id: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("WestFax API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body is not valid JSON for the expected envelope.
    #[error("Failed to decode response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// I/O error when writing a fetched document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for WestFax operations.
pub type Result<T> = core::result::Result<T, WestfaxError>;
