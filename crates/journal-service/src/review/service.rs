//! Review transitions: `pending -> approved` and `pending -> rejected`.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use journal_core::{AppError, AppResult};
use journal_entity::submission::{
    ReviewStatus, Submission, SubmissionFilter, SubmissionPatch, SubmissionStore,
};

/// The admin review service.
///
/// Every transition stamps the review timestamp and reviewer identity, then
/// re-fetches the full list so the displayed state is always a fresh read of
/// the store. Concurrent reviewers race at the store; last write wins.
#[derive(Debug, Clone)]
pub struct ReviewService {
    submissions: Arc<dyn SubmissionStore>,
}

impl ReviewService {
    /// Create a new review service.
    pub fn new(submissions: Arc<dyn SubmissionStore>) -> Self {
        Self { submissions }
    }

    /// List submissions for the review table, newest first.
    pub async fn list(&self, status: Option<ReviewStatus>) -> AppResult<Vec<Submission>> {
        let filter = SubmissionFilter {
            status,
            ..SubmissionFilter::default()
        };
        self.submissions.list(&filter).await
    }

    /// Approve a pending submission and return the refreshed list.
    pub async fn approve(
        &self,
        id: Uuid,
        reviewer: &str,
        feedback: Option<String>,
    ) -> AppResult<Vec<Submission>> {
        self.transition(id, ReviewStatus::Approved, reviewer, feedback)
            .await
    }

    /// Reject a pending submission and return the refreshed list.
    ///
    /// The caller must have confirmed the rejection interactively;
    /// `confirmed == false` issues no remote update at all.
    pub async fn reject(
        &self,
        id: Uuid,
        reviewer: &str,
        feedback: Option<String>,
        confirmed: bool,
    ) -> AppResult<Vec<Submission>> {
        if !confirmed {
            return Err(AppError::validation(
                "Rejection requires confirmation; no change was made",
            ));
        }
        self.transition(id, ReviewStatus::Rejected, reviewer, feedback)
            .await
    }

    async fn transition(
        &self,
        id: Uuid,
        target: ReviewStatus,
        reviewer: &str,
        feedback: Option<String>,
    ) -> AppResult<Vec<Submission>> {
        let current = self
            .submissions
            .get_by_slug_or_id(&id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Submission {id} not found")))?;

        if !current.status.can_transition_to(target) {
            return Err(AppError::conflict(format!(
                "Cannot move submission from {} to {target}",
                current.status
            )));
        }

        let patch =
            SubmissionPatch::review_decision(target, reviewer.to_string(), Utc::now(), feedback);
        self.submissions.update(id, &patch).await?;
        info!(%id, status = %target, reviewer, "Review decision recorded");

        // No optimistic local patching: hand back a fresh read.
        self.list(None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{visible_submission, MemorySubmissionStore};
    use journal_core::error::ErrorKind;

    fn pending(title: &str) -> Submission {
        let mut s = visible_submission(title);
        s.status = ReviewStatus::Pending;
        s.document_url = None;
        s.thumbnail_url = None;
        s.reviewed_at = None;
        s.reviewed_by = None;
        s
    }

    #[tokio::test]
    async fn test_approve_stamps_reviewer_and_refetches() {
        let store = Arc::new(MemorySubmissionStore::new());
        let record = pending("Standing Doctrine");
        let id = record.id;
        store.seed(record);

        let service = ReviewService::new(store.clone());
        let refreshed = service
            .approve(id, "editor@ucla.edu", None)
            .await
            .unwrap();

        assert_eq!(refreshed.len(), 1);
        let updated = &refreshed[0];
        assert_eq!(updated.status, ReviewStatus::Approved);
        assert_eq!(updated.reviewed_by.as_deref(), Some("editor@ucla.edu"));
        assert!(updated.reviewed_at.is_some());
    }

    #[tokio::test]
    async fn test_reject_without_confirmation_changes_nothing() {
        let store = Arc::new(MemorySubmissionStore::new());
        let record = pending("Standing Doctrine");
        let id = record.id;
        store.seed(record);

        let service = ReviewService::new(store.clone());
        let err = service
            .reject(id, "editor@ucla.edu", None, false)
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(store.all()[0].status, ReviewStatus::Pending);
    }

    #[tokio::test]
    async fn test_confirmed_reject_records_feedback() {
        let store = Arc::new(MemorySubmissionStore::new());
        let record = pending("Standing Doctrine");
        let id = record.id;
        store.seed(record);

        let service = ReviewService::new(store.clone());
        service
            .reject(id, "editor@ucla.edu", Some("Out of scope".to_string()), true)
            .await
            .unwrap();

        let updated = &store.all()[0];
        assert_eq!(updated.status, ReviewStatus::Rejected);
        assert_eq!(updated.feedback.as_deref(), Some("Out of scope"));
    }

    #[tokio::test]
    async fn test_transitions_are_one_way() {
        let store = Arc::new(MemorySubmissionStore::new());
        let mut record = pending("Standing Doctrine");
        record.status = ReviewStatus::Approved;
        let id = record.id;
        store.seed(record);

        let service = ReviewService::new(store.clone());
        let err = service
            .reject(id, "editor@ucla.edu", None, true)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }
}
