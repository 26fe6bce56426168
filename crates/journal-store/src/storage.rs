//! Object storage against the hosted bucket API.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use tokio::sync::watch;
use tracing::debug;

use journal_core::traits::ObjectStore;
use journal_core::AppResult;

use crate::client::{response_error, transport_error, ServiceClient};

/// Upload chunk size. Progress is reported once per chunk handed to the
/// transport.
const CHUNK_BYTES: usize = 64 * 1024;

/// Implementation of [`ObjectStore`] over the hosted bucket API.
///
/// Uploads use the elevated storage key when one is configured, otherwise
/// the public key; public URLs resolve without any key.
#[derive(Debug, Clone)]
pub struct BucketObjectStore {
    client: ServiceClient,
}

impl BucketObjectStore {
    /// Create a new object store over the shared service client.
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{key}", self.client.base_url())
    }

    /// The publicly resolvable URL the bucket issues for an object.
    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{bucket}/{key}",
            self.client.base_url()
        )
    }
}

#[async_trait]
impl ObjectStore for BucketObjectStore {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
        progress: Option<watch::Sender<u64>>,
    ) -> AppResult<String> {
        let total = data.len() as u64;
        debug!(bucket, key, total, "Uploading object");

        // Chunk the payload so the progress channel advances as bytes are
        // handed to the transport rather than jumping straight to done.
        let chunks: Vec<Bytes> = (0..data.len())
            .step_by(CHUNK_BYTES)
            .map(|start| data.slice(start..data.len().min(start + CHUNK_BYTES)))
            .collect();

        let body_stream = stream::iter(chunks.into_iter().map({
            let mut sent: u64 = 0;
            move |chunk| {
                sent += chunk.len() as u64;
                if let Some(tx) = &progress {
                    let _ = tx.send(sent);
                }
                Ok::<Bytes, std::io::Error>(chunk)
            }
        }));

        let request = self
            .client
            .with_storage_auth(self.client.http().post(self.object_url(bucket, key)))
            .header("Content-Type", content_type)
            .header("x-upsert", "true")
            .body(reqwest::Body::wrap_stream(body_stream));

        let response = request
            .send()
            .await
            .map_err(|e| transport_error("Failed to upload object", e))?;

        if !response.status().is_success() {
            return Err(response_error("Failed to upload object", response).await);
        }

        Ok(self.public_url(bucket, key))
    }

    async fn health_check(&self) -> AppResult<bool> {
        // Any HTTP answer proves the storage endpoint is reachable; only a
        // transport failure counts against it.
        let url = format!("{}/storage/v1/version", self.client.base_url());
        match self.client.http().get(url).send().await {
            Ok(_) => Ok(true),
            Err(e) => Err(transport_error("Storage health check failed", e)),
        }
    }
}
