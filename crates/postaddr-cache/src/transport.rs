//! External boundaries of the cache
//!
//! The cache never talks to the network or to persistent storage directly.
//! It goes through two small traits so embedders can plug in their own HTTP
//! client and on-disk cache.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;

/// Transport error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("service returned status {0}")]
    Status(u16),
}

impl From<TransportError> for postaddr_common::Error {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Timeout => Self::Timeout,
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Asynchronous request for a JSON blob
#[async_trait]
pub trait AsyncRequest: Send + Sync {
    /// Fetch the body at `url`.
    ///
    /// Implementations must resolve with [`TransportError::Timeout`] once
    /// `timeout` has elapsed, even if the underlying connection lingers.
    async fn request_object(&self, url: &str, timeout: Duration) -> Result<String, TransportError>;
}

/// Transport that never reaches the network; every request fails
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineRequest;

#[async_trait]
impl AsyncRequest for OfflineRequest {
    async fn request_object(&self, url: &str, _timeout: Duration) -> Result<String, TransportError> {
        Err(TransportError::Unavailable(format!("offline: {url}")))
    }
}

/// Best-effort persistent cache keyed by serialized lookup key
pub trait ClientCache: Send + Sync {
    /// Stored blob, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store a blob
    fn put(&self, key: &str, data: &str);
}

/// Client cache that stores nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClientCache;

impl ClientCache for NoopClientCache {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn put(&self, _key: &str, _data: &str) {}
}

/// Client cache held in process memory
#[derive(Debug, Default)]
pub struct InMemoryClientCache {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryClientCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ClientCache for InMemoryClientCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, data: &str) {
        self.entries.write().insert(key.to_string(), data.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_request_fails() {
        let result = OfflineRequest
            .request_object("http://example.invalid/data/US", Duration::from_secs(1))
            .await;
        assert!(matches!(result, Err(TransportError::Unavailable(_))));
    }

    #[test]
    fn test_in_memory_client_cache() {
        let cache = InMemoryClientCache::new();
        assert!(cache.is_empty());
        cache.put("data/US", r#"{"id":"data/US"}"#);
        assert_eq!(cache.get("data/US").as_deref(), Some(r#"{"id":"data/US"}"#));
        assert_eq!(cache.get("data/CA"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_noop_client_cache() {
        NoopClientCache.put("data/US", "{}");
        assert_eq!(NoopClientCache.get("data/US"), None);
    }

    #[test]
    fn test_transport_error_conversion() {
        let e: postaddr_common::Error = TransportError::Timeout.into();
        assert!(matches!(e, postaddr_common::Error::Timeout));
        let e: postaddr_common::Error = TransportError::Status(503).into();
        assert!(e.is_retryable());
    }
}
