//! Public catalog handlers: listing, live search, article detail, and
//! extracted text.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use journal_core::error::ErrorKind;
use journal_core::AppError;
use journal_entity::submission::{LegalArea, Submission};
use journal_service::extract::Extracted;

use crate::dto::request::CatalogQuery;
use crate::dto::response::{ApiResponse, ArticleTextResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// Message shown when a document yields no text.
const EXTRACTION_PLACEHOLDER: &str =
    "A text preview is not available for this article. Use the download link to read it.";

/// Publications page payload.
#[derive(Debug, Clone, Serialize)]
pub struct PublicationsContent {
    /// Matching published articles, newest first.
    pub articles: Vec<Submission>,
    /// Count shown above the grid.
    pub total: usize,
}

fn parse_area(query: &CatalogQuery) -> Result<Option<LegalArea>, HttpError> {
    query
        .area
        .as_deref()
        .map(str::parse::<LegalArea>)
        .transpose()
        .map_err(HttpError::from)
}

/// GET /publications
pub async fn publications(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ApiResponse<PublicationsContent>>, HttpError> {
    let area = parse_area(&query)?;
    let articles = state
        .catalog_service
        .published(area, query.q.clone())
        .await?;
    let total = articles.len();

    Ok(Json(ApiResponse::ok(PublicationsContent {
        articles,
        total,
    })))
}

/// GET /api/search
///
/// The keystroke-driven search path: queries pass through the debounce
/// window and sequence-token guard, so a superseded request answers with
/// the latest published results instead of its own stale ones.
pub async fn live_search(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ApiResponse<PublicationsContent>>, HttpError> {
    let term = query
        .q
        .ok_or_else(|| AppError::validation("Query parameter 'q' is required"))?;

    let results = match state.search.search(term).await? {
        Some(results) => results,
        None => state.search.latest(),
    };

    let total = results.submissions.len();
    Ok(Json(ApiResponse::ok(PublicationsContent {
        articles: results.submissions,
        total,
    })))
}

/// GET /article/{slug_or_id}
pub async fn article_detail(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<Submission>>, HttpError> {
    let article = state
        .catalog_service
        .article(&key)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Article '{key}' not found")))?;

    Ok(Json(ApiResponse::ok(article)))
}

/// GET /article/{slug_or_id}/text
///
/// Extraction failures degrade to a placeholder message; only a missing
/// article is an error.
pub async fn article_text(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<ArticleTextResponse>>, HttpError> {
    let article = state
        .catalog_service
        .article(&key)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Article '{key}' not found")))?;

    let Some(document_url) = article.document_url.as_deref() else {
        return Ok(Json(ApiResponse::ok(placeholder())));
    };

    // Dropping the handler (client disconnect) abandons the extraction with
    // it; the token is the explicit half of that contract.
    let cancel = CancellationToken::new();
    let response = match state.extractor.extract_text(document_url, cancel).await {
        Ok(Extracted::Text(text)) => ArticleTextResponse {
            text: Some(text),
            placeholder: None,
        },
        Ok(Extracted::Empty) => placeholder(),
        Err(e) if e.kind == ErrorKind::NotFound => return Err(e.into()),
        Err(e) => {
            tracing::warn!(article = %article.id, error = %e, "Text extraction degraded");
            placeholder()
        }
    };

    Ok(Json(ApiResponse::ok(response)))
}

fn placeholder() -> ArticleTextResponse {
    ArticleTextResponse {
        text: None,
        placeholder: Some(EXTRACTION_PLACEHOLDER.to_string()),
    }
}
