//! postaddr Metadata - hierarchy nodes and bootstrap data
//!
//! Address metadata is organised as a tree of nodes (country, admin area,
//! locality, dependent locality). Each node is a flat set of string
//! attributes delivered as a JSON object. This crate provides:
//!
//! - [`NodeData`]: a parsed node with typed attribute access and the pure
//!   [`merge`] function used when fetched data completes bootstrap data.
//! - [`MetadataStore`]: read-only access to the bundled per-country table
//!   used before (or instead of) any network fetch.

pub mod node;
pub mod region_data;
pub mod store;

pub use node::{merge, AddressDataKey, NodeData};
pub use store::MetadataStore;
