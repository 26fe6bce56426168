//! Content handlers for the marketing pages.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use journal_entity::submission::{LegalArea, Submission};
use journal_service::catalog::CatalogStats;

use crate::dto::response::ApiResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Home page payload: hero copy, the featured rotation, and the stats strip.
#[derive(Debug, Clone, Serialize)]
pub struct HomeContent {
    /// Hero heading.
    pub title: &'static str,
    /// Hero subheading.
    pub subtitle: &'static str,
    /// Featured articles, in rotation order for the carousel.
    pub featured: Vec<Submission>,
    /// Stats strip counts.
    pub stats: CatalogStats,
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HomeContent>>, HttpError> {
    let featured = state.catalog_service.featured().await?;
    let stats = state.catalog_service.stats().await?;

    Ok(Json(ApiResponse::ok(HomeContent {
        title: "UCLA Undergraduate Law Journal",
        subtitle: "Original legal scholarship by undergraduate researchers",
        featured,
        stats,
    })))
}

/// About page payload.
#[derive(Debug, Clone, Serialize)]
pub struct AboutContent {
    /// Page heading.
    pub title: &'static str,
    /// Body paragraphs.
    pub paragraphs: Vec<&'static str>,
}

/// GET /about
pub async fn about() -> Json<ApiResponse<AboutContent>> {
    Json(ApiResponse::ok(AboutContent {
        title: "About the Journal",
        paragraphs: vec![
            "The UCLA Undergraduate Law Journal publishes original, unpublished legal \
             scholarship from undergraduate students across all institutions.",
            "Every submission undergoes a rigorous peer-review process led by our \
             student editorial board, with faculty guidance.",
            "Accepted articles appear in our public catalog and are archived as part \
             of the journal's permanent collection.",
        ],
    }))
}

/// A member of the editorial board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardMember {
    /// Member name.
    pub name: &'static str,
    /// Board position.
    pub position: &'static str,
}

/// Editorial board page payload.
#[derive(Debug, Clone, Serialize)]
pub struct AboutUsContent {
    /// Page heading.
    pub title: &'static str,
    /// The editorial board.
    pub board: Vec<BoardMember>,
}

/// GET /about-us
pub async fn about_us() -> Json<ApiResponse<AboutUsContent>> {
    Json(ApiResponse::ok(AboutUsContent {
        title: "Editorial Board",
        board: vec![
            BoardMember {
                name: "Editor-in-Chief",
                position: "Editor-in-Chief",
            },
            BoardMember {
                name: "Managing Editor",
                position: "Managing Editor",
            },
            BoardMember {
                name: "Submissions Editor",
                position: "Submissions Editor",
            },
        ],
    }))
}

/// A selectable legal area.
#[derive(Debug, Clone, Serialize)]
pub struct AreaOption {
    /// Wire value submitted with the form.
    pub value: &'static str,
    /// Label shown to the author.
    pub label: &'static str,
}

/// Submission requirements shown above the intake form.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitContent {
    /// Page heading.
    pub title: &'static str,
    /// Requirement bullet list.
    pub requirements: Vec<String>,
    /// Selectable legal areas.
    pub areas: Vec<AreaOption>,
    /// Expected review turnaround.
    pub response_window: &'static str,
}

/// GET /submit
pub async fn submit_info(State(state): State<AppState>) -> Json<ApiResponse<SubmitContent>> {
    let intake = &state.config.intake;
    let requirements = vec![
        "Article must be 5,000-10,000 words (excluding footnotes)".to_string(),
        "Proper legal citation format (Bluebook 21st edition)".to_string(),
        format!(
            "Abstract of 150-{} words required",
            intake.abstract_word_limit
        ),
        "Must select a primary legal area".to_string(),
        "Author must be currently enrolled as an undergraduate student".to_string(),
        format!(
            "Submit the article as a .docx document under {} MB, with a thumbnail image \
             under {} MB",
            intake.max_document_bytes / (1024 * 1024),
            intake.max_thumbnail_bytes / (1024 * 1024)
        ),
        format!(
            "Submissions are accepted from institutional email addresses ({})",
            intake.allowed_email_domains.join(", ")
        ),
    ];

    Json(ApiResponse::ok(SubmitContent {
        title: "Submit Your Article",
        requirements,
        areas: LegalArea::ALL
            .iter()
            .map(|area| AreaOption {
                value: area.as_str(),
                label: area.label(),
            })
            .collect(),
        response_window: "You will receive a response within 6-8 weeks.",
    }))
}
