//! Shared test helpers for integration tests.
//!
//! Builds the real router over in-memory implementations of the remote
//! collaborators, so whole request flows run without the hosted services.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::Router;
use bytes::Bytes;
use chrono::Utc;
use http::{HeaderMap, Request, StatusCode};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use journal_api::{build_router, AppState};
use journal_auth::token::SessionClaims;
use journal_auth::{AdminGate, TokenVerifier};
use journal_core::config::app::ServerConfig;
use journal_core::config::identity::IdentityConfig;
use journal_core::config::intake::IntakeConfig;
use journal_core::config::logging::LoggingConfig;
use journal_core::config::store::{BucketConfig, StoreConfig};
use journal_core::config::{AppConfig, ExtractionConfig, SearchConfig};
use journal_core::traits::ObjectStore;
use journal_core::{AppError, AppResult};
use journal_entity::member::{MembershipDirectory, OrgMember};
use journal_entity::submission::{
    CreateSubmission, LegalArea, ReviewStatus, Submission, SubmissionFilter, SubmissionPatch,
    SubmissionStore,
};
use journal_service::catalog::CatalogService;
use journal_service::extract::DocumentExtractor;
use journal_service::intake::IntakeService;
use journal_service::review::ReviewService;
use journal_service::search::SearchCoordinator;

const TEST_TOKEN_SECRET: &str = "integration-test-secret";

/// In-memory stand-in for the remote submissions table.
#[derive(Debug, Default)]
pub struct MockSubmissionStore {
    rows: Mutex<Vec<Submission>>,
}

impl MockSubmissionStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<Submission> {
        self.rows.lock().unwrap().clone()
    }

    pub fn seed(&self, submission: Submission) {
        self.rows.lock().unwrap().push(submission);
    }
}

#[async_trait]
impl SubmissionStore for MockSubmissionStore {
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

/// In-memory stand-in for the object storage bucket API.
#[derive(Debug, Default)]
pub struct MockObjectStore {
    objects: Mutex<HashMap<String, usize>>,
}

impl MockObjectStore {
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        _content_type: &str,
        progress: Option<tokio::sync::watch::Sender<u64>>,
    ) -> AppResult<String> {
        if let Some(tx) = &progress {
            let _ = tx.send(data.len() as u64);
        }
        self.objects
            .lock()
            .unwrap()
            .insert(format!("{bucket}/{key}"), data.len());
        Ok(format!("https://storage.test/{bucket}/{key}"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Fixed membership directory.
#[derive(Debug, Default)]
pub struct MockDirectory;

#[async_trait]
impl MembershipDirectory for MockDirectory {
    async fn list_members(&self) -> AppResult<Vec<OrgMember>> {
        Ok(vec![OrgMember {
            user_id: "user_admin".to_string(),
            identifier: "editor@ucla.edu".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Alvarez".to_string()),
            role: "org:admin".to_string(),
        }])
    }
}

/// A parsed test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Test application context.
pub struct TestApp {
    pub router: Router,
    pub submissions: Arc<MockSubmissionStore>,
    pub objects: Arc<MockObjectStore>,
}

impl TestApp {
    /// Build the real router over mock collaborators.
    pub fn new() -> Self {
        let config = test_config();
        let submissions = Arc::new(MockSubmissionStore::default());
        let objects = Arc::new(MockObjectStore::default());

        let intake_service = Arc::new(IntakeService::new(
            submissions.clone(),
            objects.clone(),
            config.intake.clone(),
            config.store.buckets.clone(),
        ));
        let review_service = Arc::new(ReviewService::new(submissions.clone()));
        let catalog_service = Arc::new(CatalogService::new(submissions.clone()));
        let search = Arc::new(SearchCoordinator::new(
            catalog_service.clone(),
            Duration::from_millis(config.search.debounce_millis),
        ));
        let extractor =
            Arc::new(DocumentExtractor::new(&config.extraction).expect("extractor build"));

        let state = AppState {
            token_verifier: Arc::new(TokenVerifier::new(&config.identity)),
            admin_gate: Arc::new(AdminGate::new(&config.identity)),
            config: Arc::new(config),
            submissions: submissions.clone(),
            members: Arc::new(MockDirectory),
            intake_service,
            review_service,
            catalog_service,
            search,
            extractor,
        };

        Self {
            router: build_router(state),
            submissions,
            objects,
        }
    }

    /// Issue a request with an optional JSON body and bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request build"),
            None => builder.body(Body::empty()).expect("request build"),
        };
        self.send(request).await
    }

    /// Issue a raw request.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router call");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// A session token whose org role passes the admin gate.
    pub fn admin_token(&self) -> String {
        sign_token("user_admin", Some("org:admin"))
    }

    /// A session token for an ordinary member.
    pub fn member_token(&self) -> String {
        sign_token("user_member", Some("org:member"))
    }
}

fn sign_token(user_id: &str, org_role: Option<&str>) -> String {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: Some(format!("{user_id}@ucla.edu")),
        org_role: org_role.map(String::from),
        exp: Utc::now().timestamp() + 3600,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_TOKEN_SECRET.as_bytes()),
    )
    .expect("token encode")
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        store: StoreConfig {
            url: "http://127.0.0.1:1".to_string(),
            public_key: "test-public-key".to_string(),
            service_key: None,
            request_timeout_seconds: 1,
            buckets: BucketConfig::default(),
        },
        identity: IdentityConfig {
            token_secret: TEST_TOKEN_SECRET.to_string(),
            issuer: None,
            api_url: "http://127.0.0.1:1".to_string(),
            api_key: "test-api-key".to_string(),
            organization_id: "org_test".to_string(),
            admin_role: "org:admin".to_string(),
            admin_user_ids: vec!["user_allowlisted".to_string()],
        },
        intake: IntakeConfig::default(),
        extraction: ExtractionConfig::default(),
        search: SearchConfig { debounce_millis: 1 },
        logging: LoggingConfig::default(),
    }
}

/// An approved submission visible in the public catalog.
pub fn visible_submission(title: &str) -> Submission {
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
        document_url: Some("https://storage.test/documents/x.docx".to_string()),
        thumbnail_url: Some("https://storage.test/thumbnails/x-thumb.png".to_string()),
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

/// A pending submission awaiting review.
pub fn pending_submission(title: &str) -> Submission {
    let mut s = visible_submission(title);
    s.status = ReviewStatus::Pending;
    s.document_url = None;
    s.thumbnail_url = None;
    s
}

/// Build a multipart form body for the intake endpoint.
///
/// Returns the content-type header value and the body bytes.
pub fn multipart_form(
    fields: &[(&str, &str)],
    files: &[(&str, &str, &str, Vec<u8>)],
) -> (String, Vec<u8>) {
    const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for (name, file_name, content_type, bytes) in files {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={BOUNDARY}"),
        body,
    )
}

/// The DOCX MIME type accepted by the intake flow.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
