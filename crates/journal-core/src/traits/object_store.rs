//! Object storage trait for the hosted bucket API.

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::watch;

use crate::result::AppResult;

/// Trait for the hosted object-storage collaborator.
///
/// Uploads are keyed by bucket and object key and yield a publicly
/// resolvable URL on success. Implementations report incremental progress
/// through the optional watch channel as bytes reach the remote side.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Upload an object and return its public URL.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
        progress: Option<watch::Sender<u64>>,
    ) -> AppResult<String>;

    /// Check whether the storage endpoint is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
