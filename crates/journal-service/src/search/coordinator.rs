//! Search coordinator for keystroke-driven catalog queries.
//!
//! Two guards keep typing from hammering the store and from racing itself:
//! a debounce window (only the last query submitted within the window
//! executes) and a monotonically increasing sequence token (a completed
//! response is published only while its token is still the latest issued,
//! so out-of-order arrivals never clobber newer results). In-flight
//! requests are not cancelled when superseded; their results are simply
//! discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use journal_core::AppResult;
use journal_entity::submission::Submission;

use crate::catalog::CatalogService;

/// The latest published search results.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    /// Sequence token of the query that produced these results.
    pub token: u64,
    /// The query text.
    pub query: String,
    /// Matching published articles.
    pub submissions: Vec<Submission>,
}

/// Debounces and sequences catalog search queries.
#[derive(Debug, Clone)]
pub struct SearchCoordinator {
    catalog: Arc<CatalogService>,
    debounce: Duration,
    /// Bumped on every submission; a sleeper only proceeds if it is still
    /// the newest arming when its window closes.
    armed: Arc<AtomicU64>,
    /// Bumped when a query is issued; gates publication.
    issued: Arc<AtomicU64>,
    results_tx: Arc<watch::Sender<SearchResults>>,
}

impl SearchCoordinator {
    /// Create a coordinator over the catalog service.
    pub fn new(catalog: Arc<CatalogService>, debounce: Duration) -> Self {
        let (results_tx, _) = watch::channel(SearchResults::default());
        Self {
            catalog,
            debounce,
            armed: Arc::new(AtomicU64::new(0)),
            issued: Arc::new(AtomicU64::new(0)),
            results_tx: Arc::new(results_tx),
        }
    }

    /// Subscribe to published results.
    pub fn subscribe(&self) -> watch::Receiver<SearchResults> {
        self.results_tx.subscribe()
    }

    /// The most recently published results.
    pub fn latest(&self) -> SearchResults {
        self.results_tx.borrow().clone()
    }

    /// Run one query through the debounce and sequencing guards.
    ///
    /// Returns `Ok(None)` when the query was superseded — either during its
    /// debounce window or after its response arrived stale — in which case
    /// nothing was published and [`latest`](Self::latest) still holds the
    /// newest results.
    pub async fn search(&self, query: String) -> AppResult<Option<SearchResults>> {
        let arming = self.armed.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.debounce).await;
        if self.armed.load(Ordering::SeqCst) != arming {
            // Superseded during the debounce window; never issued.
            return Ok(None);
        }

        let token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, %query, "Issuing catalog search");
        let submissions = self.catalog.published(None, Some(query.clone())).await?;

        // Discard stale completions: a newer query has been issued.
        if self.issued.load(Ordering::SeqCst) != token {
            debug!(token, "Discarding stale search response");
            return Ok(None);
        }

        let results = SearchResults {
            token,
            query,
            submissions,
        };
        let _ = self.results_tx.send(results.clone());
        Ok(Some(results))
    }

    /// Submit a query without awaiting it; results arrive via
    /// [`subscribe`](Self::subscribe).
    pub fn submit(&self, query: String) {
        let this = self.clone();
        tokio::spawn(async move {
            if let Err(e) = this.search(query).await {
                tracing::warn!(error = %e, "Catalog search failed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{visible_submission, MemorySubmissionStore};

    fn coordinator(store: Arc<MemorySubmissionStore>) -> SearchCoordinator {
        SearchCoordinator::new(
            Arc::new(CatalogService::new(store)),
            Duration::from_millis(300),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_query_in_window_executes() {
        let store = Arc::new(MemorySubmissionStore::new());
        store.seed(visible_submission("Water Rights"));
        store.seed(visible_submission("Watergate Revisited"));

        let coordinator = coordinator(store);
        let mut rx = coordinator.subscribe();

        coordinator.submit("wat".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        coordinator.submit("watergate".to_string());

        rx.changed().await.unwrap();
        let results = rx.borrow_and_update().clone();
        assert_eq!(results.query, "watergate");
        assert_eq!(results.submissions.len(), 1);
        // The superseded arming never issued a query.
        assert_eq!(results.token, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queries_outside_window_both_publish() {
        let store = Arc::new(MemorySubmissionStore::new());
        store.seed(visible_submission("Water Rights"));

        let coordinator = coordinator(store);

        let first = coordinator.search("water".to_string()).await.unwrap().unwrap();
        assert_eq!(first.token, 1);
        assert_eq!(first.submissions.len(), 1);

        let second = coordinator.search("rights".to_string()).await.unwrap().unwrap();
        assert_eq!(second.token, 2);
        assert_eq!(coordinator.latest().query, "rights");
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_query_reports_none() {
        let store = Arc::new(MemorySubmissionStore::new());
        store.seed(visible_submission("Water Rights"));

        let coordinator = coordinator(store);

        let first = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move { coordinator.search("wat".to_string()).await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = coordinator.search("water".to_string()).await.unwrap();

        assert!(first.await.unwrap().unwrap().is_none());
        assert_eq!(second.unwrap().query, "water");
    }
}
