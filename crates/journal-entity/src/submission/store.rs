//! Store-facing repository trait for submissions.

use async_trait::async_trait;
use uuid::Uuid;

use journal_core::AppResult;

use super::filter::SubmissionFilter;
use super::model::{CreateSubmission, Submission, SubmissionPatch};

/// Trait for the remote `submissions` table.
///
/// All operations are remote calls with no local fallback; failures
/// propagate as typed errors carrying the remote message. Reads are ordered
/// by creation time descending.
#[async_trait]
pub trait SubmissionStore: Send + Sync + std::fmt::Debug + 'static {
    /// List submissions matching a filter.
    async fn list(&self, filter: &SubmissionFilter) -> AppResult<Vec<Submission>>;

    /// Look up a single submission by slug, falling back to id.
    async fn get_by_slug_or_id(&self, key: &str) -> AppResult<Option<Submission>>;

    /// Insert a new record and return it with store-generated fields.
    async fn create(&self, fields: &CreateSubmission) -> AppResult<Submission>;

    /// Apply a partial update and return the updated record.
    async fn update(&self, id: Uuid, patch: &SubmissionPatch) -> AppResult<Submission>;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
