//! De-duplicating metadata cache
//!
//! Keeps every node fetched so far, the keys the service has no data for,
//! and one in-flight marker per key being fetched. All four pieces of state
//! sit behind a single lock that is never held across an `.await`, so the
//! check-bad / check-in-flight / register / insert sequence for a key is
//! atomic.
//!
//! Concurrent requests for the same key share one fetch: the first caller
//! owns the fetch and publishes completion on a `watch` channel; everyone
//! else waits on a clone of its receiver.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use parking_lot::Mutex;
use postaddr_common::{Error, LookupKey, Result};
use postaddr_metadata::{merge, AddressDataKey, MetadataStore, NodeData};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::transport::{AsyncRequest, ClientCache, NoopClientCache, TransportError};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Observer of a load.
///
/// `loading_begin` is called before any asynchronous work, `loading_end`
/// exactly once after the load has settled, whatever the outcome.
pub trait DataLoadListener: Send + Sync {
    fn loading_begin(&self) {}
    fn loading_end(&self) {}
}

/// Cache statistics for monitoring
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Requests handed to the transport
    pub network_requests: AtomicU64,
    /// Loads served from the client cache
    pub client_cache_hits: AtomicU64,
    /// Keys recorded as having no data
    pub bad_keys: AtomicU64,
    /// Fetches that failed in the transport
    pub transport_failures: AtomicU64,
    /// Country nodes installed from bootstrap data
    pub bootstrap_fallbacks: AtomicU64,
}

impl CacheStats {
    #[must_use]
    pub fn network_requests(&self) -> u64 {
        self.network_requests.load(Ordering::Relaxed)
    }
}

#[derive(Default)]
struct CacheState {
    /// Valid entries by serialized key
    nodes: HashMap<String, NodeData>,
    /// Keys known to have no data
    bad_keys: HashSet<String>,
    /// Keys with a fetch in progress
    in_flight: HashMap<String, watch::Receiver<bool>>,
}

/// What a caller has to do for a key
enum Action {
    Ready,
    Wait(watch::Receiver<bool>),
    Fetch(watch::Sender<bool>),
}

enum FetchOutcome {
    Loaded(NodeData),
    Invalid(Error),
    Failed(TransportError),
}

/// Releases an in-flight key and wakes its waiters, also when the owning
/// future is dropped before the fetch settles.
struct InFlight<'a> {
    state: &'a Mutex<CacheState>,
    key: String,
    tx: watch::Sender<bool>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.lock().in_flight.remove(&self.key);
        self.tx.send_replace(true);
    }
}

/// Cache of address metadata nodes
pub struct MetadataCache {
    service_url: String,
    timeout: Duration,
    transport: Arc<dyn AsyncRequest>,
    client_cache: Arc<dyn ClientCache>,
    bootstrap: Arc<MetadataStore>,
    state: Mutex<CacheState>,
    stats: CacheStats,
}

impl MetadataCache {
    /// Create a cache fetching `<service_url>/<key>` through `transport`
    pub fn new(service_url: impl Into<String>, transport: Arc<dyn AsyncRequest>) -> Self {
        let service_url: String = service_url.into();
        Self {
            service_url: service_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport,
            client_cache: Arc::new(NoopClientCache),
            bootstrap: Arc::new(MetadataStore::bootstrap()),
            state: Mutex::new(CacheState::default()),
            stats: CacheStats::default(),
        }
    }

    /// Consult `client_cache` before the network and store fetched blobs in it
    #[must_use]
    pub fn with_client_cache(mut self, client_cache: Arc<dyn ClientCache>) -> Self {
        self.client_cache = client_cache;
        self
    }

    /// Replace the bootstrap data used for country fallbacks
    #[must_use]
    pub fn with_bootstrap(mut self, bootstrap: Arc<MetadataStore>) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Set the per-request timeout handed to the transport
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn bootstrap(&self) -> &MetadataStore {
        &self.bootstrap
    }

    /// Cached node for a serialized key
    pub fn get(&self, key: &str) -> Option<NodeData> {
        self.state.lock().nodes.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.state.lock().nodes.contains_key(key)
    }

    pub fn is_bad_key(&self, key: &str) -> bool {
        self.state.lock().bad_keys.contains(key)
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.state.lock().in_flight.contains_key(key)
    }

    /// Number of valid entries
    pub fn len(&self) -> usize {
        self.state.lock().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make sure `key` is resident, fetching it if needed.
    ///
    /// Returns once the key is cached, known bad, or its fetch has failed.
    /// Fetched data is merged over `existing`: fetched attributes win,
    /// `existing` fills the gaps. Failures are never retried here; a later
    /// call for the same key starts a new fetch.
    pub async fn fetch_or_load(
        &self,
        key: &LookupKey,
        existing: Option<&NodeData>,
        listener: Option<&dyn DataLoadListener>,
    ) {
        if let Some(l) = listener {
            l.loading_begin();
        }

        let key_str = key.to_string();
        match self.begin(&key_str) {
            Action::Ready => {}
            Action::Wait(mut rx) => {
                debug!(key = %key_str, "joining in-flight fetch");
                // Err means the owner went away; its guard already released the key.
                let _ = rx.wait_for(|done| *done).await;
            }
            Action::Fetch(tx) => {
                let in_flight = InFlight {
                    state: &self.state,
                    key: key_str.clone(),
                    tx,
                };
                let outcome = self.load(&key_str).await;
                self.commit(key, &key_str, existing, outcome);
                drop(in_flight);
            }
        }

        if let Some(l) = listener {
            l.loading_end();
        }
    }

    /// [`MetadataCache::fetch_or_load`] followed by a lookup
    pub async fn load_node(&self, key: &LookupKey, existing: Option<&NodeData>) -> Option<NodeData> {
        self.fetch_or_load(key, existing, None).await;
        self.get(key.as_str())
    }

    /// Load `key` and, recursively, every descendant flagged in `sub_mores`.
    ///
    /// Children are fetched concurrently; completes once the whole fan-out
    /// has settled.
    pub async fn prefetch_subtree(&self, key: &LookupKey, listener: Option<&dyn DataLoadListener>) {
        if let Some(l) = listener {
            l.loading_begin();
        }

        let mut pending = FuturesUnordered::new();
        pending.push(self.load_and_expand(key.clone()));
        let mut settled = 0usize;
        while let Some(children) = pending.next().await {
            settled += 1;
            for child in children {
                pending.push(self.load_and_expand(child));
            }
        }
        info!(key = %key, nodes = settled, "prefetch complete");

        if let Some(l) = listener {
            l.loading_end();
        }
    }

    async fn load_and_expand(&self, key: LookupKey) -> Vec<LookupKey> {
        let existing = self.bootstrap.node_for_key(key.as_str());
        let Some(node) = self.load_node(&key, existing).await else {
            return Vec::new();
        };
        node.sub_keys()
            .into_iter()
            .zip(node.sub_mores())
            .filter(|(_, more)| *more)
            .filter_map(|(sub_key, _)| match key.child_key(sub_key) {
                Ok(child) => Some(child),
                Err(e) => {
                    warn!(key = %key, sub_key = %sub_key, error = %e, "skipping child key");
                    None
                }
            })
            .collect()
    }

    fn begin(&self, key: &str) -> Action {
        let mut state = self.state.lock();
        if state.nodes.contains_key(key) || state.bad_keys.contains(key) {
            return Action::Ready;
        }
        if let Some(rx) = state.in_flight.get(key) {
            return Action::Wait(rx.clone());
        }
        let (tx, rx) = watch::channel(false);
        state.in_flight.insert(key.to_string(), rx);
        Action::Fetch(tx)
    }

    async fn load(&self, key: &str) -> FetchOutcome {
        if let Some(blob) = self.client_cache.get(key).filter(|b| !b.is_empty()) {
            match parse_response(key, &blob) {
                Ok(node) => {
                    self.stats.client_cache_hits.fetch_add(1, Ordering::Relaxed);
                    debug!(key = %key, "loaded from client cache");
                    return FetchOutcome::Loaded(node);
                }
                Err(e) => debug!(key = %key, error = %e, "ignoring unusable client cache entry"),
            }
        }

        let url = format!("{}/{key}", self.service_url);
        self.stats.network_requests.fetch_add(1, Ordering::Relaxed);
        debug!(key = %key, url = %url, "fetching metadata");
        match self.transport.request_object(&url, self.timeout).await {
            Ok(body) => match parse_response(key, &body) {
                Ok(node) => {
                    self.client_cache.put(key, &body);
                    FetchOutcome::Loaded(node)
                }
                Err(e) => FetchOutcome::Invalid(e),
            },
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    fn commit(
        &self,
        key: &LookupKey,
        key_str: &str,
        existing: Option<&NodeData>,
        outcome: FetchOutcome,
    ) {
        let mut state = self.state.lock();
        match outcome {
            FetchOutcome::Loaded(node) => {
                let node = match existing {
                    Some(existing) => merge(&node, existing),
                    None => node,
                };
                state.nodes.insert(key_str.to_string(), node);
            }
            FetchOutcome::Invalid(e) => {
                warn!(key = %key_str, error = %e, "invalid or empty data returned");
                if !self.install_fallback(&mut state, key, key_str) {
                    state.bad_keys.insert(key_str.to_string());
                    self.stats.bad_keys.fetch_add(1, Ordering::Relaxed);
                }
            }
            FetchOutcome::Failed(e) => {
                warn!(key = %key_str, error = %e, "metadata fetch failed");
                self.stats.transport_failures.fetch_add(1, Ordering::Relaxed);
                self.install_fallback(&mut state, key, key_str);
            }
        }
    }

    /// Install bundled data for a country key that has no node
    fn install_fallback(&self, state: &mut CacheState, key: &LookupKey, key_str: &str) -> bool {
        if !key.is_country_key() || state.nodes.contains_key(key_str) {
            return false;
        }
        let Some(node) = self.bootstrap.node_for_key(key_str) else {
            return false;
        };
        info!(key = %key_str, "using bootstrap data");
        let node = node.clone().with(AddressDataKey::Id, key_str);
        state.nodes.insert(key_str.to_string(), node);
        self.stats.bootstrap_fallbacks.fetch_add(1, Ordering::Relaxed);
        true
    }
}

/// A response is usable only if it parses and carries an `id`
fn parse_response(key: &str, body: &str) -> Result<NodeData> {
    let node = NodeData::from_json(body)?;
    if node.id().is_none() {
        return Err(Error::BadKey(key.to_string()));
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::InMemoryClientCache;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Semaphore;

    const URL: &str = "http://test";

    /// Transport serving canned responses, optionally held until released
    struct FakeRequest {
        responses: HashMap<String, std::result::Result<String, TransportError>>,
        calls: AtomicUsize,
        gated: bool,
        gate: Semaphore,
    }

    impl FakeRequest {
        fn new(responses: &[(&str, std::result::Result<&str, TransportError>)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone().map(str::to_string)))
                    .collect(),
                calls: AtomicUsize::new(0),
                gated: false,
                gate: Semaphore::new(0),
            }
        }

        fn gated(mut self) -> Self {
            self.gated = true;
            self
        }

        fn release(&self) {
            self.gate.add_permits(1);
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AsyncRequest for FakeRequest {
        async fn request_object(
            &self,
            url: &str,
            _timeout: Duration,
        ) -> std::result::Result<String, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.gated {
                self.gate.acquire().await.unwrap().forget();
            }
            let key = url.strip_prefix("http://test/").unwrap();
            self.responses
                .get(key)
                .cloned()
                .unwrap_or(Err(TransportError::Status(404)))
        }
    }

    #[derive(Default)]
    struct CountingListener {
        begins: AtomicUsize,
        ends: AtomicUsize,
    }

    impl DataLoadListener for CountingListener {
        fn loading_begin(&self) {
            self.begins.fetch_add(1, Ordering::SeqCst);
        }

        fn loading_end(&self) {
            assert!(self.begins.load(Ordering::SeqCst) > self.ends.load(Ordering::SeqCst));
            self.ends.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn key(s: &str) -> LookupKey {
        LookupKey::parse(s).unwrap()
    }

    const US_CA: &str = r#"{"id":"data/US/CA","key":"CA","name":"California","zip":"9[0-5]|96[01]"}"#;

    #[tokio::test]
    async fn test_second_call_is_a_cache_hit() {
        let fake = Arc::new(FakeRequest::new(&[("data/US/CA", Ok(US_CA))]));
        let cache = MetadataCache::new(URL, fake.clone());
        let listener = CountingListener::default();

        cache.fetch_or_load(&key("data/US/CA"), None, Some(&listener)).await;
        let first = cache.get("data/US/CA").unwrap();
        cache.fetch_or_load(&key("data/US/CA"), None, Some(&listener)).await;
        let second = cache.get("data/US/CA").unwrap();

        assert_eq!(fake.calls(), 1);
        assert_eq!(first, second);
        assert_eq!(listener.begins.load(Ordering::SeqCst), 2);
        assert_eq!(listener.ends.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_fetch() {
        let fake = Arc::new(FakeRequest::new(&[("data/US/CA", Ok(US_CA))]).gated());
        let cache = MetadataCache::new(URL, fake.clone());
        let listener = CountingListener::default();
        let k = key("data/US/CA");

        let requests = futures::future::join_all(
            (0..10).map(|_| cache.fetch_or_load(&k, None, Some(&listener))),
        );
        let release = async {
            tokio::task::yield_now().await;
            assert_eq!(fake.calls(), 1);
            assert_eq!(listener.begins.load(Ordering::SeqCst), 10);
            assert_eq!(listener.ends.load(Ordering::SeqCst), 0);
            assert!(cache.is_in_flight("data/US/CA"));
            fake.release();
        };
        tokio::join!(requests, release);

        assert_eq!(fake.calls(), 1);
        assert_eq!(listener.ends.load(Ordering::SeqCst), 10);
        assert!(cache.contains("data/US/CA"));
        assert!(!cache.is_in_flight("data/US/CA"));

        cache.fetch_or_load(&k, None, None).await;
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_tasks_share_one_fetch() {
        let fake = Arc::new(FakeRequest::new(&[("data/US/CA", Ok(US_CA))]).gated());
        let cache = Arc::new(MetadataCache::new(URL, fake.clone()));
        let listener = Arc::new(CountingListener::default());

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let cache = cache.clone();
                let listener = listener.clone();
                tokio::spawn(async move {
                    cache
                        .fetch_or_load(
                            &key("data/US/CA"),
                            None,
                            Some(&*listener as &dyn DataLoadListener),
                        )
                        .await;
                    cache.get("data/US/CA")
                })
            })
            .collect();

        while listener.begins.load(Ordering::SeqCst) < 10 {
            tokio::task::yield_now().await;
        }
        fake.release();

        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }
        assert_eq!(fake.calls(), 1);
        assert_eq!(listener.ends.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn test_response_without_id_marks_key_bad() {
        let fake = Arc::new(FakeRequest::new(&[("data/US/ZZ", Ok("{}"))]));
        let cache = MetadataCache::new(URL, fake.clone());

        cache.fetch_or_load(&key("data/US/ZZ"), None, None).await;
        assert!(cache.is_bad_key("data/US/ZZ"));
        assert!(cache.get("data/US/ZZ").is_none());

        cache.fetch_or_load(&key("data/US/ZZ"), None, None).await;
        assert_eq!(fake.calls(), 1);
        assert_eq!(cache.stats().bad_keys.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_marks_key_bad() {
        let fake = Arc::new(FakeRequest::new(&[("data/US/CA", Ok("<html>oops"))]));
        let cache = MetadataCache::new(URL, fake.clone());

        cache.fetch_or_load(&key("data/US/CA"), None, None).await;
        assert!(cache.is_bad_key("data/US/CA"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_cached() {
        let fake = Arc::new(FakeRequest::new(&[(
            "data/US/CA",
            Err(TransportError::Timeout),
        )]));
        let cache = MetadataCache::new(URL, fake.clone());
        let listener = CountingListener::default();

        cache.fetch_or_load(&key("data/US/CA"), None, Some(&listener)).await;
        assert_eq!(listener.ends.load(Ordering::SeqCst), 1);
        assert!(!cache.contains("data/US/CA"));
        assert!(!cache.is_bad_key("data/US/CA"));
        assert!(!cache.is_in_flight("data/US/CA"));

        // The caller may ask again; the cache does not retry on its own.
        cache.fetch_or_load(&key("data/US/CA"), None, None).await;
        assert_eq!(fake.calls(), 2);
    }

    #[tokio::test]
    async fn test_country_failure_falls_back_to_bootstrap() {
        let fake = Arc::new(FakeRequest::new(&[]));
        let cache = MetadataCache::new(URL, fake.clone());

        cache.fetch_or_load(&key("data/CH"), None, None).await;
        let node = cache.get("data/CH").unwrap();
        assert_eq!(node.id(), Some("data/CH"));
        assert_eq!(node.get(AddressDataKey::Fmt), Some("%O%n%N%n%A%nCH-%Z %C"));
        assert_eq!(cache.stats().bootstrap_fallbacks.load(Ordering::Relaxed), 1);

        // Below country level there is nothing to fall back to.
        cache.fetch_or_load(&key("data/CH/ZH"), None, None).await;
        assert!(cache.get("data/CH/ZH").is_none());
    }

    #[tokio::test]
    async fn test_language_variant_falls_back_to_country() {
        let fake = Arc::new(FakeRequest::new(&[]));
        let cache = MetadataCache::new(URL, fake.clone());

        cache.fetch_or_load(&key("data/CA--fr"), None, None).await;
        let node = cache.get("data/CA--fr").unwrap();
        assert_eq!(node.id(), Some("data/CA--fr"));
        assert_eq!(node.get(AddressDataKey::Require), Some("ACSZ"));
        assert!(!cache.contains("data/CA"));
    }

    #[tokio::test]
    async fn test_fetched_data_merges_over_existing() {
        let fake = Arc::new(FakeRequest::new(&[(
            "data/US",
            Ok(r#"{"id":"data/US","sub_keys":"CA~NY","zipex":"95014"}"#),
        )]));
        let cache = MetadataCache::new(URL, fake.clone());
        let existing = NodeData::new()
            .with(AddressDataKey::Fmt, "%N%n%O%n%A%n%C, %S %Z")
            .with(AddressDataKey::Zipex, "00000");

        let node = cache.load_node(&key("data/US"), Some(&existing)).await.unwrap();
        assert_eq!(node.get(AddressDataKey::Fmt), Some("%N%n%O%n%A%n%C, %S %Z"));
        assert_eq!(node.get(AddressDataKey::Zipex), Some("95014"));
        assert_eq!(node.sub_keys(), vec!["CA", "NY"]);
    }

    #[tokio::test]
    async fn test_client_cache_is_consulted_and_filled() {
        let fake = Arc::new(FakeRequest::new(&[("data/US/CA", Ok(US_CA))]));
        let client_cache = Arc::new(InMemoryClientCache::new());
        client_cache.put("data/US/NY", r#"{"id":"data/US/NY","key":"NY"}"#);
        let cache = MetadataCache::new(URL, fake.clone()).with_client_cache(client_cache.clone());

        cache.fetch_or_load(&key("data/US/NY"), None, None).await;
        assert!(cache.contains("data/US/NY"));
        assert_eq!(fake.calls(), 0);
        assert_eq!(cache.stats().client_cache_hits.load(Ordering::Relaxed), 1);

        cache.fetch_or_load(&key("data/US/CA"), None, None).await;
        assert_eq!(fake.calls(), 1);
        assert_eq!(client_cache.get("data/US/CA").as_deref(), Some(US_CA));
    }

    #[tokio::test]
    async fn test_unusable_client_cache_entry_falls_through_to_network() {
        let fake = Arc::new(FakeRequest::new(&[("data/US/CA", Ok(US_CA))]));
        let client_cache = Arc::new(InMemoryClientCache::new());
        client_cache.put("data/US/CA", "garbage");
        let cache = MetadataCache::new(URL, fake.clone()).with_client_cache(client_cache);

        cache.fetch_or_load(&key("data/US/CA"), None, None).await;
        assert!(cache.contains("data/US/CA"));
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test]
    async fn test_dropped_fetch_releases_key() {
        let fake = Arc::new(FakeRequest::new(&[("data/US/CA", Ok(US_CA))]).gated());
        let cache = MetadataCache::new(URL, fake.clone());

        let abandoned = tokio::time::timeout(
            Duration::from_millis(20),
            cache.fetch_or_load(&key("data/US/CA"), None, None),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(!cache.is_in_flight("data/US/CA"));

        fake.release();
        cache.fetch_or_load(&key("data/US/CA"), None, None).await;
        assert_eq!(fake.calls(), 2);
        assert!(cache.contains("data/US/CA"));
    }

    #[tokio::test]
    async fn test_prefetch_follows_sub_mores() {
        let fake = Arc::new(FakeRequest::new(&[
            (
                "data/XA",
                Ok(r#"{"id":"data/XA","sub_keys":"North~South","sub_mores":"true~false"}"#),
            ),
            (
                "data/XA/North",
                Ok(r#"{"id":"data/XA/North","sub_keys":"Alpha~Beta","sub_mores":"true"}"#),
            ),
            ("data/XA/North/Alpha", Ok(r#"{"id":"data/XA/North/Alpha"}"#)),
            ("data/XA/North/Beta", Ok(r#"{"id":"data/XA/North/Beta"}"#)),
        ]));
        let cache = MetadataCache::new(URL, fake.clone());
        let listener = CountingListener::default();

        cache.prefetch_subtree(&key("data/XA"), Some(&listener)).await;

        assert_eq!(fake.calls(), 4);
        assert!(cache.contains("data/XA/North/Alpha"));
        assert!(cache.contains("data/XA/North/Beta"));
        assert!(!cache.contains("data/XA/South"));
        assert_eq!(listener.begins.load(Ordering::SeqCst), 1);
        assert_eq!(listener.ends.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_prefetch_of_missing_key_completes() {
        let fake = Arc::new(FakeRequest::new(&[]));
        let cache = MetadataCache::new(URL, fake.clone());
        let listener = CountingListener::default();

        cache.prefetch_subtree(&key("data/XB"), Some(&listener)).await;
        assert_eq!(listener.ends.load(Ordering::SeqCst), 1);
        assert!(cache.is_empty());
    }
}
