//! Error types for Battle.net API operations.

use thiserror::Error;

/// Errors that can occur during Battle.net API operations.
///
/// A `304 Not Modified` answer to a conditional request is not an error;
/// it surfaces as [`Fetched::NotModified`](crate::Fetched::NotModified).
#[derive(Debug, Error)]
pub enum BattleNetError {
    /// Configuration is missing or incomplete.
    #[error("Battle.net configuration required: {0}")]
    ConfigMissing(String),

    /// Unknown region name.
    #[error("Invalid region '{0}': expected one of us, eu, kr, tw")]
    InvalidRegion(String),

    /// Unknown locale tag.
    #[error("Invalid locale '{0}': expected a tag like 'en_US'")]
    InvalidLocale(String),

    /// Unknown field name in a field list.
    #[error("Invalid field '{0}'")]
    InvalidField(String),

    /// API answered with a non-success status.
    #[error("Battle.net API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Request signature could not be computed.
    #[error("Failed to sign request: {0}")]
    Signing(String),
}

impl BattleNetError {
    /// HTTP status code, if the error came from a server response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BattleNetError::ApiError { status_code, .. } => *status_code,
            BattleNetError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a not found error (404).
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

/// Result type alias for Battle.net operations.
pub type Result<T> = core::result::Result<T, BattleNetError>;
