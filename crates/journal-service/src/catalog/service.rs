//! Read-side service for the public pages.

use std::sync::Arc;

use serde::Serialize;

use journal_core::AppResult;
use journal_entity::submission::{
    LegalArea, Submission, SubmissionFilter, SubmissionStore,
};

/// Counts shown on the home page stats strip.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    /// Articles visible in the public catalog.
    pub published_articles: usize,
    /// Submissions awaiting review.
    pub pending_submissions: usize,
    /// Number of legal areas covered.
    pub legal_areas: usize,
}

/// The public catalog service.
///
/// Only approved records with both artifact URLs are ever returned from the
/// public read paths; records an admin approved before their uploads
/// completed stay hidden.
#[derive(Debug, Clone)]
pub struct CatalogService {
    submissions: Arc<dyn SubmissionStore>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(submissions: Arc<dyn SubmissionStore>) -> Self {
        Self { submissions }
    }

    /// List published articles, optionally filtered by area and search
    /// term, newest first.
    pub async fn published(
        &self,
        area: Option<LegalArea>,
        search: Option<String>,
    ) -> AppResult<Vec<Submission>> {
        let mut filter = SubmissionFilter::approved();
        if let Some(area) = area {
            filter = filter.with_area(area);
        }
        if let Some(term) = search {
            filter = filter.with_search(term);
        }

        let rows = self.submissions.list(&filter).await?;
        Ok(rows
            .into_iter()
            .filter(Submission::is_publicly_visible)
            .collect())
    }

    /// The featured articles for the home carousel, in rotation order.
    pub async fn featured(&self) -> AppResult<Vec<Submission>> {
        let rows = self.submissions.list(&SubmissionFilter::featured()).await?;
        Ok(rows
            .into_iter()
            .filter(Submission::is_publicly_visible)
            .collect())
    }

    /// Look up a published article by slug, falling back to id.
    ///
    /// Records outside the public catalog resolve to `None` regardless of
    /// whether the store has them.
    pub async fn article(&self, key: &str) -> AppResult<Option<Submission>> {
        Ok(self
            .submissions
            .get_by_slug_or_id(key)
            .await?
            .filter(Submission::is_publicly_visible))
    }

    /// Counts for the home page stats strip.
    pub async fn stats(&self) -> AppResult<CatalogStats> {
        let published = self.published(None, None).await?.len();
        let pending = self
            .submissions
            .list(&SubmissionFilter::pending())
            .await?
            .len();
        Ok(CatalogStats {
            published_articles: published,
            pending_submissions: pending,
            legal_areas: LegalArea::ALL.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{visible_submission, MemorySubmissionStore};
    use journal_entity::submission::ReviewStatus;

    #[tokio::test]
    async fn test_published_hides_approved_records_without_urls() {
        let store = Arc::new(MemorySubmissionStore::new());
        store.seed(visible_submission("Visible Article"));
        let mut approved_no_urls = visible_submission("Half Uploaded");
        approved_no_urls.thumbnail_url = None;
        store.seed(approved_no_urls);
        let mut pending = visible_submission("Still Pending");
        pending.status = ReviewStatus::Pending;
        store.seed(pending);

        let catalog = CatalogService::new(store);
        let published = catalog.published(None, None).await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "Visible Article");
    }

    #[tokio::test]
    async fn test_article_lookup_by_slug_then_id() {
        let store = Arc::new(MemorySubmissionStore::new());
        let record = visible_submission("Visible Article");
        let id = record.id;
        store.seed(record);

        let catalog = CatalogService::new(store);
        assert!(catalog.article("visible-article").await.unwrap().is_some());
        assert!(catalog.article(&id.to_string()).await.unwrap().is_some());
        assert!(catalog.article("missing-slug").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_hidden_article_is_none_even_by_id() {
        let store = Arc::new(MemorySubmissionStore::new());
        let mut record = visible_submission("Half Uploaded");
        record.document_url = None;
        let id = record.id;
        store.seed(record);

        let catalog = CatalogService::new(store);
        assert!(catalog.article(&id.to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_featured_rotation_set() {
        let store = Arc::new(MemorySubmissionStore::new());
        let mut featured = visible_submission("Front Page");
        featured.featured = Some(true);
        store.seed(featured);
        store.seed(visible_submission("Ordinary"));

        let catalog = CatalogService::new(store);
        let rotation = catalog.featured().await.unwrap();
        assert_eq!(rotation.len(), 1);
        assert_eq!(rotation[0].title, "Front Page");
    }

    #[tokio::test]
    async fn test_stats_counts() {
        let store = Arc::new(MemorySubmissionStore::new());
        store.seed(visible_submission("One"));
        let mut pending = visible_submission("Two");
        pending.status = ReviewStatus::Pending;
        store.seed(pending);

        let catalog = CatalogService::new(store);
        let stats = catalog.stats().await.unwrap();
        assert_eq!(stats.published_articles, 1);
        assert_eq!(stats.pending_submissions, 1);
        assert_eq!(stats.legal_areas, 5);
    }
}
