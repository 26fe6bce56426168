//! Fetches an article document and extracts its plain text.
//!
//! The whole operation, fetch included, runs inside a fixed time budget and
//! honors an external cancellation token; both abandon the in-flight
//! request and surface an `Aborted` outcome rather than hanging. A document
//! with no extractable text is a recoverable [`Extracted::Empty`], not a
//! failure, so the caller can show a fallback message.

use std::io::{Cursor, Read};
use std::time::Duration;

use bytes::Bytes;
use quick_xml::events::Event;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use journal_core::config::ExtractionConfig;
use journal_core::error::{AppError, ErrorKind};
use journal_core::AppResult;

/// Outcome of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    /// The document's plain text.
    Text(String),
    /// The document parsed but contained no text.
    Empty,
}

/// Extracts plain text from hosted article documents.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    http: reqwest::Client,
    budget: Duration,
}

impl DocumentExtractor {
    /// Build an extractor from configuration.
    pub fn new(config: &ExtractionConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to build extraction HTTP client: {e}"),
                e,
            )
        })?;
        Ok(Self {
            http,
            budget: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// Fetch a document by URL and extract its text.
    ///
    /// Repeated calls with the same URL revalidate against the remote;
    /// nothing is cached, negative results included.
    pub async fn extract_text(
        &self,
        url: &str,
        cancel: CancellationToken,
    ) -> AppResult<Extracted> {
        let work = async {
            let bytes = self.fetch(url).await?;
            // Archive walking is sync work; keep it off the runtime.
            tokio::task::spawn_blocking(move || parse_docx(&bytes))
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Internal, "Extraction task panicked", e)
                })?
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                Err(AppError::aborted("Document extraction was cancelled"))
            }
            result = tokio::time::timeout(self.budget, work) => match result {
                Ok(outcome) => outcome,
                Err(_) => Err(AppError::aborted(format!(
                    "Document extraction timed out after {}s",
                    self.budget.as_secs()
                ))),
            }
        }
    }

    async fn fetch(&self, url: &str) -> AppResult<Bytes> {
        debug!(%url, "Fetching document for extraction");
        let response = self.http.get(url).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to fetch document: {e}"),
                e,
            )
        })?;

        if !response.status().is_success() {
            return Err(AppError::external(format!(
                "Document fetch failed: HTTP {}",
                response.status()
            )));
        }

        response.bytes().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to read document body: {e}"),
                e,
            )
        })
    }
}

/// Pull the text runs out of a DOCX payload.
///
/// A DOCX file is a zip archive; the body lives in `word/document.xml` as
/// `w:t` runs grouped into `w:p` paragraphs.
fn parse_docx(bytes: &[u8]) -> AppResult<Extracted> {
    if bytes.is_empty() {
        return Err(AppError::validation("Document payload is empty"));
    }

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::validation(format!("Document is not a valid archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| AppError::validation(format!("Document has no body part: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::validation(format!("Document body is unreadable: {e}")))?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_run = false,
                b"w:p" => {
                    if !text.is_empty() && !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) if in_run => {
                let run = e.unescape().map_err(|e| {
                    AppError::validation(format!("Document body is not valid XML: {e}"))
                })?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::validation(format!(
                    "Document body is not valid XML: {e}"
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        Ok(Extracted::Empty)
    } else {
        Ok(Extracted::Text(trimmed.to_string()))
    }
}
