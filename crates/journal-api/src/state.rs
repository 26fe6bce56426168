//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use journal_auth::{AdminGate, TokenVerifier};
use journal_core::config::AppConfig;
use journal_entity::member::MembershipDirectory;
use journal_entity::submission::SubmissionStore;
use journal_service::catalog::CatalogService;
use journal_service::extract::DocumentExtractor;
use journal_service::intake::IntakeService;
use journal_service::review::ReviewService;
use journal_service::search::SearchCoordinator;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // ── Remote collaborators ─────────────────────────────────
    /// The remote submissions table.
    pub submissions: Arc<dyn SubmissionStore>,
    /// The identity provider's membership directory.
    pub members: Arc<dyn MembershipDirectory>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session-token verifier.
    pub token_verifier: Arc<TokenVerifier>,
    /// Admin authorization gate.
    pub admin_gate: Arc<AdminGate>,

    // ── Services ─────────────────────────────────────────────
    /// Submission intake flow.
    pub intake_service: Arc<IntakeService>,
    /// Admin review flow.
    pub review_service: Arc<ReviewService>,
    /// Public catalog reads.
    pub catalog_service: Arc<CatalogService>,
    /// Debounced catalog search.
    pub search: Arc<SearchCoordinator>,
    /// Document text extraction.
    pub extractor: Arc<DocumentExtractor>,
}
