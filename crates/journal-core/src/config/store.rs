//! Hosted data store and object storage configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the hosted database/storage service.
///
/// The service exposes a REST data API for tables and a bucket API for
/// object storage under the same base URL. Reads and normal writes use the
/// public key; the elevated key is used for storage writes when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted service (no trailing slash).
    pub url: String,
    /// Public (anonymous) API key sent with every request.
    pub public_key: String,
    /// Elevated storage key for administrative uploads. Optional: normal
    /// operation must never require it.
    #[serde(default)]
    pub service_key: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Object storage bucket names.
    #[serde(default)]
    pub buckets: BucketConfig,
}

impl StoreConfig {
    /// The key used for object-storage writes: the elevated key when
    /// configured, otherwise the public key.
    pub fn storage_key(&self) -> &str {
        self.service_key.as_deref().unwrap_or(&self.public_key)
    }
}

/// Names of the object storage buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Bucket holding submitted article documents.
    #[serde(default = "default_documents_bucket")]
    pub documents: String,
    /// Bucket holding submitted thumbnail images.
    #[serde(default = "default_thumbnails_bucket")]
    pub thumbnails: String,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            documents: default_documents_bucket(),
            thumbnails: default_thumbnails_bucket(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_documents_bucket() -> String {
    "documents".to_string()
}

fn default_thumbnails_bucket() -> String {
    "thumbnails".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_falls_back_to_public() {
        let mut config = StoreConfig {
            url: "https://store.example.com".to_string(),
            public_key: "anon".to_string(),
            service_key: None,
            request_timeout_seconds: 30,
            buckets: BucketConfig::default(),
        };
        assert_eq!(config.storage_key(), "anon");

        config.service_key = Some("elevated".to_string());
        assert_eq!(config.storage_key(), "elevated");
    }
}
