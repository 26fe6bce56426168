//! The intake state machine.
//!
//! A submission attempt moves through
//! `Validating -> CreatingRecord -> UploadingDocument -> UploadingThumbnail
//! -> PatchingRecord -> Done`, failing terminally from any step. Side
//! effects are strictly additive: no step deletes or touches unrelated
//! records.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

use journal_core::config::intake::IntakeConfig;
use journal_core::config::store::BucketConfig;
use journal_core::slug::generate_slug;
use journal_core::traits::ObjectStore;
use journal_core::AppError;
use journal_entity::submission::{
    CreateSubmission, ReviewStatus, Submission, SubmissionPatch, SubmissionStore,
};

use super::validate::{validate, IntakeForm, ValidationIssue};

/// Stages of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStage {
    /// Nothing in flight.
    Idle,
    /// Running the pre-remote checks.
    Validating,
    /// Inserting the pending record.
    CreatingRecord,
    /// Uploading the article document.
    UploadingDocument,
    /// Uploading the thumbnail image.
    UploadingThumbnail,
    /// Patching the record with the artifact URLs.
    PatchingRecord,
    /// The attempt completed.
    Done,
    /// The attempt failed terminally.
    Failed,
}

impl fmt::Display for IntakeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::CreatingRecord => "creating_record",
            Self::UploadingDocument => "uploading_document",
            Self::UploadingThumbnail => "uploading_thumbnail",
            Self::PatchingRecord => "patching_record",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Progress snapshot published while an attempt runs.
#[derive(Debug, Clone)]
pub struct IntakeProgress {
    /// Current stage.
    pub stage: IntakeStage,
    /// Bytes handed to the transport for the stage's upload, if any.
    pub uploaded_bytes: u64,
    /// Total bytes of the stage's upload, if any.
    pub total_bytes: u64,
}

impl IntakeProgress {
    fn at(stage: IntakeStage) -> Self {
        Self {
            stage,
            uploaded_bytes: 0,
            total_bytes: 0,
        }
    }
}

impl Default for IntakeProgress {
    fn default() -> Self {
        Self::at(IntakeStage::Idle)
    }
}

/// Terminal failure of a submission attempt.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// One or more pre-remote checks failed; nothing was created.
    #[error("submission failed validation")]
    Invalid(Vec<ValidationIssue>),
    /// A remote step failed. When the stage is past `CreatingRecord` the
    /// pending record already exists and stays in place.
    #[error("submission failed while {stage}: {source}")]
    Remote {
        /// The stage that failed.
        stage: IntakeStage,
        /// The underlying error.
        source: AppError,
    },
}

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::Invalid(issues) => {
                let detail = issues
                    .iter()
                    .map(|i| format!("{}: {}", i.field, i.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                AppError::validation(detail)
            }
            IntakeError::Remote { stage, source } => AppError::new(
                source.kind,
                format!("Submission failed while {stage}: {}", source.message),
            ),
        }
    }
}

/// Orchestrates one submission attempt end to end.
#[derive(Clone)]
pub struct IntakeService {
    submissions: Arc<dyn SubmissionStore>,
    objects: Arc<dyn ObjectStore>,
    config: IntakeConfig,
    buckets: BucketConfig,
}

impl fmt::Debug for IntakeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntakeService").finish()
    }
}

impl IntakeService {
    /// Create a new intake service.
    pub fn new(
        submissions: Arc<dyn SubmissionStore>,
        objects: Arc<dyn ObjectStore>,
        config: IntakeConfig,
        buckets: BucketConfig,
    ) -> Self {
        Self {
            submissions,
            objects,
            config,
            buckets,
        }
    }

    /// Run one submission attempt.
    ///
    /// Progress is published through the optional watch channel; the final
    /// record (with both artifact URLs) is returned on success. Uploads run
    /// sequentially, document first, so total latency is additive.
    pub async fn submit(
        &self,
        form: IntakeForm,
        progress: Option<watch::Sender<IntakeProgress>>,
    ) -> Result<Submission, IntakeError> {
        let report = |snapshot: IntakeProgress| {
            if let Some(tx) = &progress {
                let _ = tx.send(snapshot);
            }
        };

        report(IntakeProgress::at(IntakeStage::Validating));
        let area = match validate(&form, &self.config) {
            Ok(area) => area,
            Err(issues) => {
                report(IntakeProgress::at(IntakeStage::Failed));
                return Err(IntakeError::Invalid(issues));
            }
        };

        report(IntakeProgress::at(IntakeStage::CreatingRecord));
        let slug = generate_slug(&form.title);
        let fields = CreateSubmission {
            author_name: form.author_name.trim().to_string(),
            author_email: form.author_email.trim().to_string(),
            author_id: form.author_id.clone(),
            title: form.title.trim().to_string(),
            slug: (!slug.is_empty()).then_some(slug),
            area,
            abstract_text: form.abstract_text.trim().to_string(),
            keywords: (!form.keywords.is_empty()).then(|| form.keywords.clone()),
            status: ReviewStatus::Pending,
            submitted_at: Utc::now(),
        };

        let created = match self.submissions.create(&fields).await {
            Ok(created) => created,
            Err(source) => {
                report(IntakeProgress::at(IntakeStage::Failed));
                return Err(IntakeError::Remote {
                    stage: IntakeStage::CreatingRecord,
                    source,
                });
            }
        };
        info!(id = %created.id, "Created pending submission");

        let document_key = format!("{}.docx", created.id);
        let document_url = self
            .upload_stage(
                IntakeStage::UploadingDocument,
                &self.buckets.documents,
                &document_key,
                &form.document.bytes,
                &form.document.content_type,
                &progress,
            )
            .await?;

        let thumb_ext = form.thumbnail.extension().unwrap_or_else(|| "png".to_string());
        let thumbnail_key = format!("{}-thumb.{}", created.id, thumb_ext);
        let thumbnail_url = self
            .upload_stage(
                IntakeStage::UploadingThumbnail,
                &self.buckets.thumbnails,
                &thumbnail_key,
                &form.thumbnail.bytes,
                &form.thumbnail.content_type,
                &progress,
            )
            .await?;

        report(IntakeProgress::at(IntakeStage::PatchingRecord));
        let patch = SubmissionPatch::artifact_urls(document_url, thumbnail_url);
        let updated = match self.submissions.update(created.id, &patch).await {
            Ok(updated) => updated,
            Err(source) => {
                // The record exists without URLs and stays invisible to the
                // public catalog until fixed.
                warn!(id = %created.id, error = %source, "URL patch failed after upload");
                report(IntakeProgress::at(IntakeStage::Failed));
                return Err(IntakeError::Remote {
                    stage: IntakeStage::PatchingRecord,
                    source,
                });
            }
        };

        report(IntakeProgress::at(IntakeStage::Done));
        info!(id = %updated.id, "Submission intake complete");
        Ok(updated)
    }

    /// Upload one artifact, forwarding byte progress into the attempt's
    /// progress channel. A failure here leaves the already-created pending
    /// record in place; recovery is an operator concern.
    async fn upload_stage(
        &self,
        stage: IntakeStage,
        bucket: &str,
        key: &str,
        bytes: &bytes::Bytes,
        content_type: &str,
        progress: &Option<watch::Sender<IntakeProgress>>,
    ) -> Result<String, IntakeError> {
        let total = bytes.len() as u64;
        if let Some(tx) = progress {
            let _ = tx.send(IntakeProgress {
                stage,
                uploaded_bytes: 0,
                total_bytes: total,
            });
        }

        let byte_progress = progress.as_ref().map(|tx| {
            let (inner_tx, mut inner_rx) = watch::channel(0u64);
            let tx = tx.clone();
            tokio::spawn(async move {
                while inner_rx.changed().await.is_ok() {
                    let uploaded_bytes = *inner_rx.borrow();
                    let _ = tx.send(IntakeProgress {
                        stage,
                        uploaded_bytes,
                        total_bytes: total,
                    });
                }
            });
            inner_tx
        });

        match self
            .objects
            .upload(bucket, key, bytes.clone(), content_type, byte_progress)
            .await
        {
            Ok(url) => Ok(url),
            Err(source) => {
                warn!(bucket, key, error = %source, "Artifact upload failed");
                if let Some(tx) = progress {
                    let _ = tx.send(IntakeProgress::at(IntakeStage::Failed));
                }
                Err(IntakeError::Remote { stage, source })
            }
        }
    }
}
