//! Admin review handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use journal_core::AppError;
use journal_entity::submission::{ReviewStatus, Submission};

use crate::dto::request::{AdminListQuery, ApproveRequest, RejectRequest};
use crate::dto::response::{ApiResponse, MemberResponse};
use crate::error::HttpError;
use crate::extractors::AdminUser;
use crate::state::AppState;

fn check(request: &impl Validate) -> Result<(), HttpError> {
    request
        .validate()
        .map_err(|e| HttpError(AppError::validation(e.to_string())))
}

/// GET /admin/submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    admin: AdminUser,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<ApiResponse<Vec<Submission>>>, HttpError> {
    tracing::debug!(reviewer = %admin.user_id, "Listing submissions for review");
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ReviewStatus>)
        .transpose()?;
    let rows = state.review_service.list(status).await?;
    Ok(Json(ApiResponse::ok(rows)))
}

/// POST /api/admin/submissions/{id}/approve
pub async fn approve_submission(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<ApproveRequest>,
) -> Result<Json<ApiResponse<Vec<Submission>>>, HttpError> {
    check(&request)?;
    let refreshed = state
        .review_service
        .approve(id, admin.reviewer_identity(), request.feedback)
        .await?;
    Ok(Json(ApiResponse::ok(refreshed)))
}

/// POST /api/admin/submissions/{id}/reject
///
/// Requires `confirm: true`; the review service refuses unconfirmed
/// rejections without touching the store.
pub async fn reject_submission(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<RejectRequest>,
) -> Result<Json<ApiResponse<Vec<Submission>>>, HttpError> {
    check(&request)?;
    let refreshed = state
        .review_service
        .reject(id, admin.reviewer_identity(), request.feedback, request.confirm)
        .await?;
    Ok(Json(ApiResponse::ok(refreshed)))
}

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<Vec<MemberResponse>>>, HttpError> {
    let members = state.members.list_members().await?;
    let rows = members
        .into_iter()
        .map(|member| MemberResponse {
            name: member.display_name(),
            user_id: member.user_id,
            identifier: member.identifier,
            role: member.role,
        })
        .collect();
    Ok(Json(ApiResponse::ok(rows)))
}
