//! Submission list filters.

use serde::{Deserialize, Serialize};

use super::area::LegalArea;
use super::model::Submission;
use super::status::ReviewStatus;

/// Filter predicates for listing submissions.
///
/// Equality predicates combine with AND; `search` is a case-insensitive
/// substring match across title, author name, abstract, and area. Results
/// are always ordered newest first by creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionFilter {
    /// Match a specific workflow state.
    pub status: Option<ReviewStatus>,
    /// Match a specific legal area.
    pub area: Option<LegalArea>,
    /// Match the featured flag.
    pub featured: Option<bool>,
    /// Case-insensitive substring search term.
    pub search: Option<String>,
    /// Maximum number of records to return.
    pub limit: Option<u32>,
}

impl SubmissionFilter {
    /// Filter for records awaiting review.
    pub fn pending() -> Self {
        Self {
            status: Some(ReviewStatus::Pending),
            ..Self::default()
        }
    }

    /// Filter for approved records.
    pub fn approved() -> Self {
        Self {
            status: Some(ReviewStatus::Approved),
            ..Self::default()
        }
    }

    /// Filter for featured approved records.
    pub fn featured() -> Self {
        Self {
            status: Some(ReviewStatus::Approved),
            featured: Some(true),
            ..Self::default()
        }
    }

    /// Attach a search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        if !term.trim().is_empty() {
            self.search = Some(term);
        }
        self
    }

    /// Attach an area predicate.
    pub fn with_area(mut self, area: LegalArea) -> Self {
        self.area = Some(area);
        self
    }

    /// Evaluate this filter against a record.
    ///
    /// This is the reference definition of the filter semantics; remote
    /// implementations translate it to their query syntax, and in-memory
    /// stores apply it directly.
    pub fn matches(&self, submission: &Submission) -> bool {
        if let Some(status) = self.status {
            if submission.status != status {
                return false;
            }
        }
        if let Some(area) = self.area {
            if submission.area != area {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if submission.is_featured() != featured {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            let haystacks = [
                submission.title.as_str(),
                submission.author_name.as_str(),
                submission.abstract_text.as_str(),
                submission.area.as_str(),
            ];
            if !haystacks
                .iter()
                .any(|h| h.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample() -> Submission {
        Submission {
            id: Uuid::new_v4(),
            author_name: "Jane Smith".to_string(),
            author_email: "jane@ucla.edu".to_string(),
            author_id: None,
            title: "The Clean Water Act Revisited".to_string(),
            slug: None,
            area: LegalArea::Environmental,
            abstract_text: "Riparian rights and federal enforcement.".to_string(),
            keywords: None,
            document_url: None,
            thumbnail_url: None,
            status: ReviewStatus::Pending,
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
    fn test_search_is_case_insensitive_across_fields() {
        let s = sample();
        assert!(SubmissionFilter::default().with_search("clean water").matches(&s));
        assert!(SubmissionFilter::default().with_search("JANE").matches(&s));
        assert!(SubmissionFilter::default().with_search("riparian").matches(&s));
        assert!(SubmissionFilter::default().with_search("environmental").matches(&s));
        assert!(!SubmissionFilter::default().with_search("maritime").matches(&s));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let s = sample();
        let mut filter = SubmissionFilter::pending().with_area(LegalArea::Environmental);
        assert!(filter.matches(&s));
        filter.featured = Some(true);
        assert!(!filter.matches(&s));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = SubmissionFilter::default().with_search("   ");
        assert!(filter.search.is_none());
    }
}
