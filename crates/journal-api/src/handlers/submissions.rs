//! Submission intake endpoint.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use tokio::sync::watch;

use journal_core::AppError;
use journal_service::intake::{IntakeError, IntakeForm, IntakeProgress, UploadedFile};

use crate::dto::response::{ApiErrorResponse, ApiResponse};
use crate::error::HttpError;
use crate::extractors::MaybeAuthUser;
use crate::state::AppState;

/// POST /api/submissions
///
/// Accepts the submission form as multipart: text fields plus the article
/// document and thumbnail image. Validation failures answer 400 with
/// per-field issues and make no remote call; remote failures answer with
/// the underlying error and leave whatever the flow had already created.
pub async fn submit_article(
    State(state): State<AppState>,
    MaybeAuthUser(session): MaybeAuthUser,
    multipart: Multipart,
) -> Result<Response, HttpError> {
    let mut form = read_form(multipart).await?;
    form.author_id = session.map(|s| s.user_id);

    // Surface upload progress in the server logs; a richer client could
    // stream these snapshots instead.
    let (progress_tx, mut progress_rx) = watch::channel(IntakeProgress::default());
    tokio::spawn(async move {
        while progress_rx.changed().await.is_ok() {
            let snapshot = progress_rx.borrow().clone();
            tracing::debug!(
                stage = %snapshot.stage,
                uploaded = snapshot.uploaded_bytes,
                total = snapshot.total_bytes,
                "Intake progress"
            );
        }
    });

    match state.intake_service.submit(form, Some(progress_tx)).await {
        Ok(submission) => Ok((StatusCode::CREATED, Json(ApiResponse::ok(submission))).into_response()),
        Err(IntakeError::Invalid(issues)) => {
            let body = ApiErrorResponse {
                error: "VALIDATION_ERROR".to_string(),
                message: "Submission failed validation".to_string(),
                details: Some(serde_json::json!(issues)),
            };
            Ok((StatusCode::BAD_REQUEST, Json(body)).into_response())
        }
        Err(remote @ IntakeError::Remote { .. }) => Err(HttpError(remote.into())),
    }
}

/// Read the multipart form into an [`IntakeForm`].
async fn read_form(mut multipart: Multipart) -> Result<IntakeForm, HttpError> {
    let mut author_name = String::new();
    let mut author_email = String::new();
    let mut title = String::new();
    let mut abstract_text = String::new();
    let mut area = String::new();
    let mut keywords = Vec::new();
    let mut document: Option<UploadedFile> = None;
    let mut thumbnail: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "document" | "thumbnail" => {
                let file = UploadedFile {
                    file_name: field.file_name().unwrap_or_default().to_string(),
                    content_type: field.content_type().unwrap_or_default().to_string(),
                    bytes: read_bytes(field).await?,
                };
                if name == "document" {
                    document = Some(file);
                } else {
                    thumbnail = Some(file);
                }
            }
            "name" => author_name = read_text(field).await?,
            "email" => author_email = read_text(field).await?,
            "title" => title = read_text(field).await?,
            "abstract" => abstract_text = read_text(field).await?,
            "area" => area = read_text(field).await?,
            "keywords" => {
                keywords = read_text(field)
                    .await?
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(String::from)
                    .collect();
            }
            _ => {}
        }
    }

    let document =
        document.ok_or_else(|| AppError::validation("The article document is required"))?;
    let thumbnail =
        thumbnail.ok_or_else(|| AppError::validation("The thumbnail image is required"))?;

    Ok(IntakeForm {
        author_name,
        author_email,
        author_id: None,
        title,
        abstract_text,
        area,
        keywords,
        document,
        thumbnail,
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, HttpError> {
    field
        .text()
        .await
        .map_err(|e| HttpError(AppError::validation(format!("Unreadable form field: {e}"))))
}

async fn read_bytes(field: axum::extract::multipart::Field<'_>) -> Result<Bytes, HttpError> {
    field
        .bytes()
        .await
        .map_err(|e| HttpError(AppError::validation(format!("Unreadable file field: {e}"))))
}
