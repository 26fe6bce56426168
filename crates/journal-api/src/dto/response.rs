//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details (e.g. per-field validation issues).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Article text extraction response.
///
/// Extraction failures degrade to a placeholder message instead of failing
/// the page; exactly one of `text` and `placeholder` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleTextResponse {
    /// The extracted plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Fallback message when no text is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// A row of the admin users table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    /// Identity-provider user id.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Email identifier.
    pub identifier: String,
    /// Organization role.
    pub role: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Version of the running server.
    pub version: String,
    /// Whether the hosted data store answered.
    pub store: bool,
}
