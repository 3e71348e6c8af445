//! postaddr Cache - on-demand metadata loading
//!
//! Hierarchy nodes are fetched lazily from a metadata service through the
//! [`AsyncRequest`] transport boundary. [`MetadataCache`] guarantees that
//! concurrent requests for one key share a single fetch, remembers keys the
//! service has no data for, and falls back to bundled bootstrap data for
//! countries it cannot reach. [`ClientData`] layers the read API used by
//! the verifier on top of it.

pub mod cache;
pub mod data;
pub mod transport;

pub use cache::{CacheStats, DataLoadListener, MetadataCache};
pub use data::{ClientData, DataSource};
pub use transport::{
    AsyncRequest, ClientCache, InMemoryClientCache, NoopClientCache, OfflineRequest,
    TransportError,
};
