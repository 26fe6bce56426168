//! Session extractors — pull the bearer token from the Authorization
//! header, verify it, and build the per-request [`SessionContext`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};

use journal_auth::SessionContext;
use journal_core::AppError;

use crate::error::HttpError;
use crate::state::AppState;

/// Extracted authenticated session available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionContext);

impl std::ops::Deref for AuthUser {
    type Target = SessionContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn verify_bearer(parts: &Parts, state: &AppState) -> Result<SessionContext, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

    let claims = state.token_verifier.verify(token)?;
    Ok(SessionContext::from_claims(claims))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(AuthUser(verify_bearer(parts, state)?))
    }
}

/// Like [`AuthUser`] but never rejects: anonymous callers extract as
/// `MaybeAuthUser(None)`. The intake endpoint uses this to attach the
/// author's identity when they happen to be signed in.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<SessionContext>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(verify_bearer(parts, state).ok()))
    }
}

/// Session that passed the admin gate.
///
/// Admin routes redirect unauthenticated or unauthorized callers to the
/// home route instead of answering with an error.
#[derive(Debug, Clone)]
pub struct AdminUser(pub SessionContext);

impl std::ops::Deref for AdminUser {
    type Target = SessionContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection that sends the caller home.
pub struct RedirectHome;

impl IntoResponse for RedirectHome {
    fn into_response(self) -> Response {
        Redirect::to("/").into_response()
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = RedirectHome;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = verify_bearer(parts, state).map_err(|_| RedirectHome)?;
        if !state.admin_gate.authorizes(&session) {
            tracing::debug!(user_id = %session.user_id, "Admin access denied");
            return Err(RedirectHome);
        }
        Ok(AdminUser(session))
    }
}
