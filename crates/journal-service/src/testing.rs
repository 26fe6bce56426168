//! In-memory implementations of the boundary traits for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;

use journal_core::traits::ObjectStore;
use journal_core::{AppError, AppResult};
use journal_entity::submission::{
    CreateSubmission, Submission, SubmissionFilter, SubmissionPatch, SubmissionStore,
};

/// In-memory [`SubmissionStore`] applying [`SubmissionFilter::matches`]
/// directly.
#[derive(Debug, Default)]
pub struct MemorySubmissionStore {
    rows: Mutex<Vec<Submission>>,
    fail_create: Mutex<Option<String>>,
    fail_update: Mutex<Option<String>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<Submission> {
        self.rows.lock().unwrap().clone()
    }

    pub fn seed(&self, submission: Submission) {
        self.rows.lock().unwrap().push(submission);
    }

    /// Make the next `create` call fail with the given message.
    pub fn fail_next_create(&self, message: &str) {
        *self.fail_create.lock().unwrap() = Some(message.to_string());
    }

    /// Make the next `update` call fail with the given message.
    pub fn fail_next_update(&self, message: &str) {
        *self.fail_update.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn list(&self, filter: &SubmissionFilter) -> AppResult<Vec<Submission>> {
        let mut rows: Vec<Submission> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = filter.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn get_by_slug_or_id(&self, key: &str) -> AppResult<Option<Submission>> {
        let rows = self.rows.lock().unwrap();
        if let Some(found) = rows.iter().find(|s| s.slug.as_deref() == Some(key)) {
            return Ok(Some(found.clone()));
        }
        let Ok(id) = key.parse::<Uuid>() else {
            return Ok(None);
        };
        Ok(rows.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, fields: &CreateSubmission) -> AppResult<Submission> {
        if let Some(message) = self.fail_create.lock().unwrap().take() {
            return Err(AppError::external(message));
        }
        let now = Utc::now();
        let submission = Submission {
            id: Uuid::new_v4(),
            author_name: fields.author_name.clone(),
            author_email: fields.author_email.clone(),
            author_id: fields.author_id.clone(),
            title: fields.title.clone(),
            slug: fields.slug.clone(),
            area: fields.area,
            abstract_text: fields.abstract_text.clone(),
            keywords: fields.keywords.clone(),
            document_url: None,
            thumbnail_url: None,
            status: fields.status,
            featured: None,
            submitted_at: fields.submitted_at,
            reviewed_by: None,
            reviewed_at: None,
            feedback: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(submission.clone());
        Ok(submission)
    }

    async fn update(&self, id: Uuid, patch: &SubmissionPatch) -> AppResult<Submission> {
        if let Some(message) = self.fail_update.lock().unwrap().take() {
            return Err(AppError::external(message));
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found(format!("Submission {id} not found")))?;

        if let Some(url) = &patch.document_url {
            row.document_url = Some(url.clone());
        }
        if let Some(url) = &patch.thumbnail_url {
            row.thumbnail_url = Some(url.clone());
        }
        if let Some(status) = patch.status {
            row.status = status;
        }
        if let Some(featured) = patch.featured {
            row.featured = Some(featured);
        }
        if let Some(reviewed_by) = &patch.reviewed_by {
            row.reviewed_by = Some(reviewed_by.clone());
        }
        if let Some(reviewed_at) = patch.reviewed_at {
            row.reviewed_at = Some(reviewed_at);
        }
        if let Some(feedback) = &patch.feedback {
            row.feedback = Some(feedback.clone());
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// In-memory [`ObjectStore`] recording uploads.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, (Bytes, String)>>,
    fail_upload: Mutex<Option<String>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Make the next `upload` call fail with the given message.
    pub fn fail_next_upload(&self, message: &str) {
        *self.fail_upload.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
        progress: Option<watch::Sender<u64>>,
    ) -> AppResult<String> {
        if let Some(message) = self.fail_upload.lock().unwrap().take() {
            return Err(AppError::external(message));
        }
        if let Some(tx) = &progress {
            let _ = tx.send(data.len() as u64);
        }
        self.objects.lock().unwrap().insert(
            format!("{bucket}/{key}"),
            (data, content_type.to_string()),
        );
        Ok(format!("memory://{bucket}/{key}"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// A minimal approved-and-visible submission for seeding.
pub fn visible_submission(title: &str) -> Submission {
    use journal_entity::submission::{LegalArea, ReviewStatus};

    let now = Utc::now();
    Submission {
        id: Uuid::new_v4(),
        author_name: "Jane Smith".to_string(),
        author_email: "jane@ucla.edu".to_string(),
        author_id: None,
        title: title.to_string(),
        slug: Some(journal_core::slug::generate_slug(title)),
        area: LegalArea::Civil,
        abstract_text: "An abstract.".to_string(),
        keywords: None,
        document_url: Some("memory://documents/x.docx".to_string()),
        thumbnail_url: Some("memory://thumbnails/x-thumb.png".to_string()),
        status: ReviewStatus::Approved,
        featured: None,
        submitted_at: now,
        reviewed_by: None,
        reviewed_at: None,
        feedback: None,
        created_at: now,
        updated_at: now,
    }
}
