//! Request execution.
//!
//! [`RequestManager`] performs the HTTP GET for a fully formed URL, signs it
//! when credentials are configured, and decodes the JSON body.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, DATE, IF_MODIFIED_SINCE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{BattleNetError, Result};
use crate::signing::{http_date, Credentials};

/// Outcome of a successful request.
///
/// A conditional request whose resource did not change since the given
/// timestamp yields [`Fetched::NotModified`] instead of a body.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The decoded response body.
    Data(T),
    /// The server answered `304 Not Modified`.
    NotModified,
}

impl<T> Fetched<T> {
    /// The decoded body, or `None` when not modified.
    pub fn data(self) -> Option<T> {
        match self {
            Fetched::Data(data) => Some(data),
            Fetched::NotModified => None,
        }
    }

    /// Borrow the decoded body, if any.
    pub fn as_data(&self) -> Option<&T> {
        match self {
            Fetched::Data(data) => Some(data),
            Fetched::NotModified => None,
        }
    }

    pub fn is_not_modified(&self) -> bool {
        matches!(self, Fetched::NotModified)
    }

    /// Map the decoded body to a different type.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetched<U> {
        match self {
            Fetched::Data(data) => Fetched::Data(f(data)),
            Fetched::NotModified => Fetched::NotModified,
        }
    }
}

/// Executes GET requests against fully formed URLs.
///
/// Cheaply cloneable; clones share the connection pool.
#[derive(Clone)]
pub struct RequestManager {
    http: Client,
    credentials: Option<Arc<Credentials>>,
}

impl std::fmt::Debug for RequestManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestManager")
            .field("signed", &self.credentials.is_some())
            .finish_non_exhaustive()
    }
}

impl RequestManager {
    /// Create a request manager.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        credentials: Option<Credentials>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(user_agent)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()
            .map_err(BattleNetError::HttpError)?;

        Ok(Self {
            http,
            credentials: credentials.map(Arc::new),
        })
    }

    /// Whether requests are signed.
    pub fn is_signed(&self) -> bool {
        self.credentials.is_some()
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// With `if_modified_since` set the request is conditional and a `304`
    /// answer yields [`Fetched::NotModified`].
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, on a non-success status, or if
    /// the body does not decode as `T`.
    #[tracing::instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        if_modified_since: Option<DateTime<Utc>>,
    ) -> Result<Fetched<T>> {
        let url = Url::parse(url)?;
        let mut request = self.http.get(url.clone());

        if let Some(credentials) = &self.credentials {
            let date = http_date(Utc::now());
            let authorization = credentials.authorization("GET", &date, url.path())?;
            request = request.header(DATE, date).header(AUTHORIZATION, authorization);
        }

        if let Some(since) = if_modified_since {
            request = request.header(IF_MODIFIED_SINCE, http_date(since));
        }

        let response = request.send().await.map_err(BattleNetError::HttpError)?;
        let status = response.status();
        tracing::debug!(%status, "received response");

        if status == StatusCode::NOT_MODIFIED {
            return Ok(Fetched::NotModified);
        }

        let response = Self::check_response(response).await?;
        let body = response.text().await.map_err(BattleNetError::HttpError)?;
        let data = serde_json::from_str(&body)?;
        Ok(Fetched::Data(data))
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(BattleNetError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    ///
    /// Battle.net errors look like `{"status": "nok", "reason": "..."}`.
    async fn extract_error_message(response: Response, status: StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            for key in ["reason", "message"] {
                if let Some(msg) = json.get(key).and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }

        if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_helpers() {
        let fetched = Fetched::Data(3);
        assert!(!fetched.is_not_modified());
        assert_eq!(fetched.as_data(), Some(&3));
        assert_eq!(fetched.map(|x| x * 2).data(), Some(6));

        let fetched: Fetched<i32> = Fetched::NotModified;
        assert!(fetched.is_not_modified());
        assert_eq!(fetched.map(|x| x * 2), Fetched::NotModified);
    }

    #[test]
    fn test_request_manager_debug_hides_credentials() {
        let credentials = Credentials::new(Some("pub"), Some("very-secret"));
        let manager =
            RequestManager::new(credentials, "battlenet-test", Duration::from_secs(5)).unwrap();
        let debug = format!("{:?}", manager);
        assert!(manager.is_signed());
        assert!(debug.contains("signed: true"));
        assert!(!debug.contains("very-secret"));
    }
}
