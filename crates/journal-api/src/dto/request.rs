//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of an admin approve action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ApproveRequest {
    /// Optional feedback to the author.
    #[validate(length(max = 2000, message = "Feedback is limited to 2000 characters"))]
    pub feedback: Option<String>,
}

/// Body of an admin reject action.
///
/// `confirm` must be `true`; the interactive confirmation happens on the
/// client and an unconfirmed request issues no remote update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RejectRequest {
    /// Whether the reviewer confirmed the rejection.
    #[serde(default)]
    pub confirm: bool,
    /// Optional feedback to the author.
    #[validate(length(max = 2000, message = "Feedback is limited to 2000 characters"))]
    pub feedback: Option<String>,
}

/// Query parameters for catalog listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    /// Search term.
    pub q: Option<String>,
    /// Legal area wire value.
    pub area: Option<String>,
}

/// Query parameters for the admin submission list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminListQuery {
    /// Review status wire value.
    pub status: Option<String>,
}
