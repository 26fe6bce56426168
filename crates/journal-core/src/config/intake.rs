//! Submission intake limits.

use serde::{Deserialize, Serialize};

/// Validation limits applied before any remote call in the intake flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Maximum article document size in bytes (default 10 MB).
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: u64,
    /// Maximum thumbnail image size in bytes (default 5 MB).
    #[serde(default = "default_max_thumbnail_bytes")]
    pub max_thumbnail_bytes: u64,
    /// Maximum abstract length in words.
    #[serde(default = "default_abstract_word_limit")]
    pub abstract_word_limit: usize,
    /// Accepted MIME type for the article document.
    #[serde(default = "default_document_mime")]
    pub document_mime: String,
    /// Email domains accepted from submitting authors.
    #[serde(default = "default_allowed_email_domains")]
    pub allowed_email_domains: Vec<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: default_max_document_bytes(),
            max_thumbnail_bytes: default_max_thumbnail_bytes(),
            abstract_word_limit: default_abstract_word_limit(),
            document_mime: default_document_mime(),
            allowed_email_domains: default_allowed_email_domains(),
        }
    }
}

fn default_max_document_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_max_thumbnail_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_abstract_word_limit() -> usize {
    250
}

fn default_document_mime() -> String {
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string()
}

fn default_allowed_email_domains() -> Vec<String> {
    vec!["ucla.edu".to_string()]
}
