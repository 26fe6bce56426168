//! Per-request session context.

use crate::token::SessionClaims;

/// The signed-in user's context for one request.
///
/// Constructed by the API layer from a verified session token and passed
/// explicitly to services; it lives for the request and is dropped with it,
/// so there is no ambient auth state anywhere in the tree.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Identity-provider user id.
    pub user_id: String,
    /// Email address, when the token carries one.
    pub email: Option<String>,
    /// Organization role, when the user belongs to the journal's org.
    pub org_role: Option<String>,
}

impl SessionContext {
    /// Build a context from verified token claims.
    pub fn from_claims(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            org_role: claims.org_role,
        }
    }

    /// The identity recorded as `reviewed_by` on review decisions: the
    /// email when known, else the user id.
    pub fn reviewer_identity(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.user_id)
    }
}
