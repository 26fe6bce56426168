//! Submission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::area::LegalArea;
use super::status::ReviewStatus;

/// An article submission as stored in the remote `submissions` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Unique identifier, generated by the store.
    pub id: Uuid,
    /// Author display name.
    pub author_name: String,
    /// Author contact email.
    pub author_email: String,
    /// Identity-provider user id of the author, when signed in.
    pub author_id: Option<String>,
    /// Article title.
    pub title: String,
    /// URL slug derived from the title.
    pub slug: Option<String>,
    /// Primary legal area.
    pub area: LegalArea,
    /// Article abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Keyword list, when provided.
    pub keywords: Option<Vec<String>>,
    /// Public URL of the uploaded article document.
    #[serde(rename = "pdf_url")]
    pub document_url: Option<String>,
    /// Public URL of the uploaded thumbnail image.
    pub thumbnail_url: Option<String>,
    /// Workflow state.
    pub status: ReviewStatus,
    /// Whether the article is featured on the home page.
    pub featured: Option<bool>,
    /// When the author submitted.
    pub submitted_at: DateTime<Utc>,
    /// Reviewer identity, stamped on approve/reject.
    pub reviewed_by: Option<String>,
    /// Review timestamp, stamped on approve/reject.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Reviewer feedback to the author.
    pub feedback: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    /// Whether the record may appear in the public catalog: approved, with
    /// both artifact URLs present and non-empty.
    pub fn is_publicly_visible(&self) -> bool {
        self.status == ReviewStatus::Approved
            && self.document_url.as_deref().is_some_and(|u| !u.is_empty())
            && self.thumbnail_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Whether the record is featured.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// Fields for inserting a new submission record.
///
/// The store generates `id`, `created_at`, and `updated_at`; artifact URLs
/// are patched in after upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubmission {
    /// Author display name.
    pub author_name: String,
    /// Author contact email.
    pub author_email: String,
    /// Identity-provider user id of the author, when signed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    /// Article title.
    pub title: String,
    /// URL slug derived from the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Primary legal area.
    pub area: LegalArea,
    /// Article abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Keyword list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Initial workflow state; always `pending` from the intake flow.
    pub status: ReviewStatus,
    /// When the author submitted.
    pub submitted_at: DateTime<Utc>,
}

/// Partial update for an existing submission record.
///
/// Only fields set to `Some` are sent to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionPatch {
    /// Public URL of the uploaded article document.
    #[serde(rename = "pdf_url", skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    /// Public URL of the uploaded thumbnail image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Workflow state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    /// Featured flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Reviewer identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    /// Review timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Reviewer feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl SubmissionPatch {
    /// A patch setting both artifact URLs, as issued by the intake flow
    /// after its uploads complete.
    pub fn artifact_urls(document_url: String, thumbnail_url: String) -> Self {
        Self {
            document_url: Some(document_url),
            thumbnail_url: Some(thumbnail_url),
            ..Self::default()
        }
    }

    /// A patch recording a review decision.
    pub fn review_decision(
        status: ReviewStatus,
        reviewed_by: String,
        reviewed_at: DateTime<Utc>,
        feedback: Option<String>,
    ) -> Self {
        Self {
            status: Some(status),
            reviewed_by: Some(reviewed_by),
            reviewed_at: Some(reviewed_at),
            feedback,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(status: ReviewStatus, doc: Option<&str>, thumb: Option<&str>) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            author_name: "Jane Smith".to_string(),
            author_email: "jane@ucla.edu".to_string(),
            author_id: None,
            title: "Privacy Law in the Digital Age".to_string(),
            slug: Some("privacy-law-in-the-digital-age".to_string()),
            area: LegalArea::Civil,
            abstract_text: "An abstract.".to_string(),
            keywords: None,
            document_url: doc.map(String::from),
            thumbnail_url: thumb.map(String::from),
            status,
            featured: None,
            submitted_at: Utc::now(),
            reviewed_by: None,
            reviewed_at: None,
            feedback: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_visibility_requires_both_urls() {
        let approved = ReviewStatus::Approved;
        assert!(submission(approved, Some("https://x/d.docx"), Some("https://x/t.png"))
            .is_publicly_visible());
        assert!(!submission(approved, None, Some("https://x/t.png")).is_publicly_visible());
        assert!(!submission(approved, Some("https://x/d.docx"), None).is_publicly_visible());
        assert!(!submission(approved, Some(""), Some("https://x/t.png")).is_publicly_visible());
        assert!(!submission(ReviewStatus::Pending, Some("a"), Some("b")).is_publicly_visible());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = SubmissionPatch::artifact_urls("doc".to_string(), "thumb".to_string());
        let value = serde_json::to_value(&patch).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["pdf_url"], "doc");
        assert_eq!(object["thumbnail_url"], "thumb");
    }
}
