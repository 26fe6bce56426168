//! Submission repository against the hosted data API.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use journal_core::AppResult;
use journal_entity::submission::{
    CreateSubmission, Submission, SubmissionFilter, SubmissionPatch, SubmissionStore,
};

use crate::client::{response_error, transport_error, ServiceClient};
use crate::query::filter_query_pairs;

/// Implementation of [`SubmissionStore`] over the data API's
/// `submissions` table.
#[derive(Debug, Clone)]
pub struct RestSubmissionStore {
    client: ServiceClient,
}

impl RestSubmissionStore {
    /// Create a new repository over the shared service client.
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/submissions", self.client.base_url())
    }

    /// Run a listing with explicit query pairs and parse the row set.
    async fn fetch_rows(&self, pairs: &[(String, String)]) -> AppResult<Vec<Submission>> {
        let request = self
            .client
            .with_data_auth(self.client.http().get(self.table_url()))
            .query(pairs);

        let response = request
            .send()
            .await
            .map_err(|e| transport_error("Failed to query submissions", e))?;

        if !response.status().is_success() {
            return Err(response_error("Failed to query submissions", response).await);
        }

        response
            .json::<Vec<Submission>>()
            .await
            .map_err(|e| transport_error("Failed to decode submissions", e))
    }

}

#[async_trait]
impl SubmissionStore for RestSubmissionStore {
    async fn list(&self, filter: &SubmissionFilter) -> AppResult<Vec<Submission>> {
        let pairs = filter_query_pairs(filter);
        debug!(?pairs, "Listing submissions");
        self.fetch_rows(&pairs).await
    }

    async fn get_by_slug_or_id(&self, key: &str) -> AppResult<Option<Submission>> {
        // First try the slug; older records predate slugs, so fall back to
        // the raw id when the key parses as one.
        let by_slug = vec![
            ("slug".to_string(), format!("eq.{key}")),
            ("limit".to_string(), "1".to_string()),
        ];
        if let Some(found) = self.fetch_rows(&by_slug).await?.into_iter().next() {
            return Ok(Some(found));
        }

        let Ok(id) = key.parse::<Uuid>() else {
            return Ok(None);
        };
        let by_id = vec![
            ("id".to_string(), format!("eq.{id}")),
            ("limit".to_string(), "1".to_string()),
        ];
        Ok(self.fetch_rows(&by_id).await?.into_iter().next())
    }

    async fn create(&self, fields: &CreateSubmission) -> AppResult<Submission> {
        let request = self
            .client
            .with_data_auth(self.client.http().post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(fields);

        let response = request
            .send()
            .await
            .map_err(|e| transport_error("Failed to create submission", e))?;

        if !response.status().is_success() {
            return Err(response_error("Failed to create submission", response).await);
        }

        // The data API answers inserts with the created row set.
        let mut rows = response
            .json::<Vec<Submission>>()
            .await
            .map_err(|e| transport_error("Failed to decode created submission", e))?;

        rows.pop().ok_or_else(|| {
            journal_core::AppError::external("Store returned no row for created submission")
        })
    }

    async fn update(&self, id: Uuid, patch: &SubmissionPatch) -> AppResult<Submission> {
        let request = self
            .client
            .with_data_auth(self.client.http().patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch);

        let response = request
            .send()
            .await
            .map_err(|e| transport_error("Failed to update submission", e))?;

        if !response.status().is_success() {
            return Err(response_error("Failed to update submission", response).await);
        }

        let mut rows = response
            .json::<Vec<Submission>>()
            .await
            .map_err(|e| transport_error("Failed to decode updated submission", e))?;

        rows.pop()
            .ok_or_else(|| journal_core::AppError::not_found(format!("Submission {id} not found")))
    }

    async fn health_check(&self) -> AppResult<bool> {
        // A minimal read proves the data API answers queries.
        let filter = SubmissionFilter {
            limit: Some(1),
            ..SubmissionFilter::default()
        };
        self.fetch_rows(&filter_query_pairs(&filter)).await?;
        Ok(true)
    }
}
