//! Organization membership client for the identity provider.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use journal_core::config::identity::IdentityConfig;
use journal_core::error::{AppError, ErrorKind};
use journal_core::AppResult;
use journal_entity::member::{MembershipDirectory, OrgMember};

/// Client for the identity provider's management API.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    organization_id: String,
}

impl IdentityClient {
    /// Build a client from identity configuration.
    pub fn new(config: &IdentityConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build identity HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            organization_id: config.organization_id.clone(),
        })
    }
}

#[async_trait]
impl MembershipDirectory for IdentityClient {
    async fn list_members(&self) -> AppResult<Vec<OrgMember>> {
        let url = format!(
            "{}/organizations/{}/memberships",
            self.api_url, self.organization_id
        );
        debug!(%url, "Fetching organization memberships");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Failed to reach identity provider: {e}"),
                    e,
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external(format!(
                "Identity provider rejected membership listing: HTTP {status} {}",
                body.trim()
            )));
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Failed to decode membership payload: {e}"),
                e,
            )
        })?;

        // The provider wraps the list in a `data` envelope.
        let entries = payload
            .get("data")
            .and_then(serde_json::Value::as_array)
            .or_else(|| payload.as_array())
            .ok_or_else(|| {
                AppError::new(
                    ErrorKind::Serialization,
                    "Membership payload is not a list",
                )
            })?;

        entries.iter().map(OrgMember::from_value).collect()
    }
}
