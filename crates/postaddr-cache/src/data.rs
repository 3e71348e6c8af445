//! Read API over the metadata cache

use std::sync::Arc;

use async_trait::async_trait;
use postaddr_common::{Error, LookupKey, Result};
use postaddr_metadata::NodeData;
use tracing::debug;

use crate::cache::{DataLoadListener, MetadataCache};

/// Source of hierarchy nodes for the verifier
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Node for a serialized key, loading it if needed
    async fn get(&self, key: &str) -> Option<NodeData>;

    /// Bundled node for a country or default key such as `data/ZZ`
    fn default_data(&self, key: &str) -> Result<NodeData>;

    /// Supported country codes
    fn country_codes(&self) -> Vec<String>;
}

/// [`DataSource`] backed by a [`MetadataCache`]
#[derive(Clone)]
pub struct ClientData {
    cache: Arc<MetadataCache>,
}

impl ClientData {
    pub fn new(cache: Arc<MetadataCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &MetadataCache {
        &self.cache
    }

    /// Load `key`, seeding country nodes with their bootstrap data
    pub async fn request_data(&self, key: &LookupKey, listener: Option<&dyn DataLoadListener>) {
        let existing = self.cache.bootstrap().node_for_key(key.as_str());
        self.cache.fetch_or_load(key, existing, listener).await;
    }

    /// Load a country and every level below it
    pub async fn prefetch_country(
        &self,
        region_code: &str,
        listener: Option<&dyn DataLoadListener>,
    ) -> Result<()> {
        let key = LookupKey::parse(&format!("data/{region_code}"))?;
        if !key.is_country_key() {
            return Err(Error::invalid_key(format!("'{region_code}' is not a region code")));
        }
        self.cache.prefetch_subtree(&key, listener).await;
        Ok(())
    }
}

#[async_trait]
impl DataSource for ClientData {
    async fn get(&self, key: &str) -> Option<NodeData> {
        if let Some(node) = self.cache.get(key) {
            return Some(node);
        }
        let lookup = match LookupKey::parse(key) {
            Ok(lookup) => lookup,
            Err(e) => {
                debug!(key = %key, error = %e, "not a lookup key");
                return None;
            }
        };
        self.request_data(&lookup, None).await;
        self.cache.get(key)
    }

    fn default_data(&self, key: &str) -> Result<NodeData> {
        self.cache
            .bootstrap()
            .node_for_key(key)
            .cloned()
            .ok_or_else(|| Error::MissingDefaultData(key.to_string()))
    }

    fn country_codes(&self) -> Vec<String> {
        self.cache
            .bootstrap()
            .country_codes()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{AsyncRequest, OfflineRequest, TransportError};
    use postaddr_metadata::AddressDataKey;
    use std::time::Duration;

    struct OneNode;

    #[async_trait]
    impl AsyncRequest for OneNode {
        async fn request_object(
            &self,
            url: &str,
            _timeout: Duration,
        ) -> std::result::Result<String, TransportError> {
            match url {
                "http://test/data/US" => Ok(r#"{"id":"data/US","sub_keys":"CA~NY"}"#.to_string()),
                _ => Err(TransportError::Status(404)),
            }
        }
    }

    fn client_data(transport: Arc<dyn AsyncRequest>) -> ClientData {
        ClientData::new(Arc::new(MetadataCache::new("http://test", transport)))
    }

    #[tokio::test]
    async fn test_get_merges_fetched_country_over_bootstrap() {
        let data = client_data(Arc::new(OneNode));
        let node = data.get("data/US").await.unwrap();
        assert_eq!(node.sub_keys(), vec!["CA", "NY"]);
        assert_eq!(node.get(AddressDataKey::Require), Some("ACSZ"));
    }

    #[tokio::test]
    async fn test_get_offline_uses_bootstrap() {
        let data = client_data(Arc::new(OfflineRequest));
        let node = data.get("data/CH").await.unwrap();
        assert_eq!(node.id(), Some("data/CH"));
        assert!(data.get("data/CH/ZH").await.is_none());
    }

    #[tokio::test]
    async fn test_get_rejects_malformed_keys() {
        let data = client_data(Arc::new(OfflineRequest));
        assert!(data.get("nonsense/US").await.is_none());
    }

    #[test]
    fn test_default_data() {
        let data = client_data(Arc::new(OfflineRequest));
        assert_eq!(data.default_data("data/ZZ").unwrap().id(), Some("data/ZZ"));
        assert!(matches!(
            data.default_data("data/QQ"),
            Err(Error::MissingDefaultData(_))
        ));
        let codes = data.country_codes();
        assert!(codes.iter().any(|c| c == "US"));
        assert!(!codes.iter().any(|c| c == "ZZ"));
    }

    #[tokio::test]
    async fn test_prefetch_country_rejects_bad_region() {
        let data = client_data(Arc::new(OfflineRequest));
        assert!(data.prefetch_country("", None).await.is_err());
        data.prefetch_country("US", None).await.unwrap();
        assert!(data.cache().contains("data/US"));
    }
}
