//! Shared HTTP plumbing for the hosted service.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::info;

use journal_core::config::store::StoreConfig;
use journal_core::error::{AppError, ErrorKind};
use journal_core::AppResult;

/// Shared HTTP client for the hosted service.
///
/// Holds the base URL, the API keys, and a connection-pooled
/// `reqwest::Client` with the configured per-request timeout. The data and
/// storage façades are thin wrappers over this.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
    public_key: String,
    storage_key: String,
}

impl ServiceClient {
    /// Build a client from store configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        info!(
            url = %config.url,
            elevated_key = config.service_key.is_some(),
            "Initializing hosted service client"
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            public_key: config.public_key.clone(),
            storage_key: config.storage_key().to_string(),
        })
    }

    /// The service base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying `reqwest` client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Attach the public-key auth headers used by data-API requests.
    pub fn with_data_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.public_key)
            .bearer_auth(&self.public_key)
    }

    /// Attach the storage auth headers (elevated key when configured).
    pub fn with_storage_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.public_key)
            .bearer_auth(&self.storage_key)
    }
}

/// Map a transport-level failure into a typed error.
pub fn transport_error(context: &str, err: reqwest::Error) -> AppError {
    let kind = if err.is_timeout() {
        ErrorKind::Aborted
    } else {
        ErrorKind::ExternalService
    };
    AppError::with_source(kind, format!("{context}: {err}"), err)
}

/// Turn a non-success response into a typed error carrying the remote
/// message, consuming the response body.
pub async fn response_error(context: &str, response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = remote_message(&body).unwrap_or_else(|| body.trim().to_string());

    let kind = match status {
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorKind::Authorization,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        StatusCode::SERVICE_UNAVAILABLE => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::ExternalService,
    };

    if message.is_empty() {
        AppError::new(kind, format!("{context}: HTTP {status}"))
    } else {
        AppError::new(kind, format!("{context}: {message}"))
    }
}

/// Extract the `message` field from a service error body, if it is JSON.
fn remote_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_message_prefers_message_field() {
        assert_eq!(
            remote_message(r#"{"message":"duplicate key value","code":"23505"}"#),
            Some("duplicate key value".to_string())
        );
        assert_eq!(
            remote_message(r#"{"error":"Bucket not found"}"#),
            Some("Bucket not found".to_string())
        );
        assert_eq!(remote_message("<html>bad gateway</html>"), None);
    }
}
