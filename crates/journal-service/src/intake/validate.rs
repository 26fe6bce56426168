//! Client-side validation for the intake flow.
//!
//! Every check here runs before any remote call; a failed check aborts the
//! attempt with a field-specific message and no partial record.

use bytes::Bytes;
use serde::Serialize;

use journal_core::config::intake::IntakeConfig;
use journal_entity::submission::LegalArea;

/// A file attached to the submission form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original file name, as provided by the author.
    pub file_name: String,
    /// MIME type reported for the file.
    pub content_type: String,
    /// File content.
    pub bytes: Bytes,
}

impl UploadedFile {
    /// The file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.file_name)
            .map(|ext| ext.to_lowercase())
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// The complete submission form as received from the author.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    /// Author display name.
    pub author_name: String,
    /// Author contact email.
    pub author_email: String,
    /// Identity-provider user id, when the author is signed in.
    pub author_id: Option<String>,
    /// Article title.
    pub title: String,
    /// Article abstract.
    pub abstract_text: String,
    /// Selected legal area, as the raw form value.
    pub area: String,
    /// Keyword list.
    pub keywords: Vec<String>,
    /// The article document.
    pub document: UploadedFile,
    /// The thumbnail image.
    pub thumbnail: UploadedFile,
}

/// A single field-specific validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// The form field the issue belongs to.
    pub field: String,
    /// Message shown next to the field.
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Count the words of an abstract.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validate the whole form, returning the parsed legal area on success or
/// every failed check on error.
pub fn validate(form: &IntakeForm, config: &IntakeConfig) -> Result<LegalArea, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if form.author_name.trim().is_empty() {
        issues.push(ValidationIssue::new("author_name", "Please enter your name."));
    }
    if form.title.trim().is_empty() {
        issues.push(ValidationIssue::new("title", "Please enter an article title."));
    }

    let area = match form.area.parse::<LegalArea>() {
        Ok(area) => Some(area),
        Err(_) => {
            issues.push(ValidationIssue::new(
                "area",
                "Please select a legal area for your article.",
            ));
            None
        }
    };

    let words = word_count(&form.abstract_text);
    if form.abstract_text.trim().is_empty() {
        issues.push(ValidationIssue::new("abstract", "Please provide an abstract."));
    } else if words > config.abstract_word_limit {
        issues.push(ValidationIssue::new(
            "abstract",
            format!(
                "Abstract is over the {}-word limit. Reduce by {} words.",
                config.abstract_word_limit,
                words - config.abstract_word_limit
            ),
        ));
    }

    if let Some(issue) = check_email(&form.author_email, &config.allowed_email_domains) {
        issues.push(issue);
    }

    if form.document.content_type != config.document_mime {
        issues.push(ValidationIssue::new(
            "document",
            "Please upload your article as a .docx document.",
        ));
    } else if form.document.size() > config.max_document_bytes {
        issues.push(ValidationIssue::new(
            "document",
            format!(
                "Document exceeds the {} MB limit.",
                config.max_document_bytes / (1024 * 1024)
            ),
        ));
    }

    if !form.thumbnail.content_type.starts_with("image/") {
        issues.push(ValidationIssue::new(
            "thumbnail",
            "Please upload the thumbnail as an image file.",
        ));
    } else if form.thumbnail.size() > config.max_thumbnail_bytes {
        issues.push(ValidationIssue::new(
            "thumbnail",
            format!(
                "Thumbnail exceeds the {} MB limit.",
                config.max_thumbnail_bytes / (1024 * 1024)
            ),
        ));
    }

    match (area, issues.is_empty()) {
        (Some(area), true) => Ok(area),
        _ => Err(issues),
    }
}

fn check_email(email: &str, allowed_domains: &[String]) -> Option<ValidationIssue> {
    let email = email.trim();
    let domain = match email.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => domain.to_lowercase(),
        _ => {
            return Some(ValidationIssue::new(
                "author_email",
                "Please enter a valid email address.",
            ));
        }
    };

    if allowed_domains.iter().any(|d| d.eq_ignore_ascii_case(&domain)) {
        None
    } else {
        Some(ValidationIssue::new(
            "author_email",
            format!("Submissions must come from an institutional email address ({}).",
                allowed_domains.join(", ")),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> IntakeForm {
        IntakeForm {
            author_name: "Jane Smith".to_string(),
            author_email: "student@ucla.edu".to_string(),
            author_id: None,
            title: "Privacy Law in the Digital Age".to_string(),
            abstract_text: "A study of privacy doctrine.".to_string(),
            area: "Civil".to_string(),
            keywords: vec![],
            document: UploadedFile {
                file_name: "article.docx".to_string(),
                content_type:
                    "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                        .to_string(),
                bytes: Bytes::from_static(b"doc"),
            },
            thumbnail: UploadedFile {
                file_name: "cover.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: Bytes::from_static(b"img"),
            },
        }
    }

    fn config() -> IntakeConfig {
        IntakeConfig::default()
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&form(), &config()).is_ok());
    }

    #[test]
    fn test_abstract_word_limit_names_excess() {
        let mut form = form();
        form.abstract_text = "word ".repeat(251);
        let issues = validate(&form, &config()).unwrap_err();
        let issue = issues.iter().find(|i| i.field == "abstract").unwrap();
        assert!(issue.message.contains("Reduce by 1 words"), "{}", issue.message);
    }

    #[test]
    fn test_email_domain_gate() {
        let mut form = form();
        form.author_email = "student@gmail.com".to_string();
        let issues = validate(&form, &config()).unwrap_err();
        assert!(issues.iter().any(|i| i.field == "author_email"));

        form.author_email = "student@ucla.edu".to_string();
        assert!(validate(&form, &config()).is_ok());

        form.author_email = "student@UCLA.EDU".to_string();
        assert!(validate(&form, &config()).is_ok());
    }

    #[test]
    fn test_document_size_ceiling() {
        let mut form = form();
        form.document.bytes = Bytes::from(vec![0u8; 11 * 1024 * 1024]);
        let issues = validate(&form, &config()).unwrap_err();
        let issue = issues.iter().find(|i| i.field == "document").unwrap();
        assert!(issue.message.contains("10 MB"), "{}", issue.message);
    }

    #[test]
    fn test_document_mime_enforced() {
        let mut form = form();
        form.document.content_type = "application/pdf".to_string();
        let issues = validate(&form, &config()).unwrap_err();
        assert!(issues.iter().any(|i| i.field == "document"));
    }

    #[test]
    fn test_unselected_area_is_an_issue() {
        let mut form = form();
        form.area = String::new();
        let issues = validate(&form, &config()).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.field == "area" && i.message.contains("select a legal area")));
    }

    #[test]
    fn test_all_failures_reported_together() {
        let mut form = form();
        form.area = String::new();
        form.author_email = "bad".to_string();
        form.thumbnail.content_type = "text/plain".to_string();
        let issues = validate(&form, &config()).unwrap_err();
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_extension() {
        let file = UploadedFile {
            file_name: "Cover.Photo.JPG".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: Bytes::new(),
        };
        assert_eq!(file.extension().as_deref(), Some("jpg"));

        let bare = UploadedFile {
            file_name: "noext".to_string(),
            content_type: "image/png".to_string(),
            bytes: Bytes::new(),
        };
        assert_eq!(bare.extension(), None);
    }
}
