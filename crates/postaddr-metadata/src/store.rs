//! Read-only bootstrap metadata store
//!
//! Parses the bundled country table once. Every node gets an `id` of the
//! form `data/<REGION>` so it can stand in for a fetched node.

use std::collections::BTreeMap;

use postaddr_common::key::{DASH_DELIM, SLASH_DELIM};
use postaddr_common::{Error, KeyType, Result};
use tracing::warn;

use crate::node::{AddressDataKey, NodeData};
use crate::region_data::COUNTRY_FORMATS;

/// Region code of the default record
pub const DEFAULT_REGION: &str = "ZZ";

/// Bootstrap country metadata
#[derive(Clone, Debug)]
pub struct MetadataStore {
    /// Region code -> node
    nodes: BTreeMap<String, NodeData>,
}

impl MetadataStore {
    /// Store backed by the bundled country table
    #[must_use]
    pub fn bootstrap() -> Self {
        Self::from_table(COUNTRY_FORMATS)
    }

    /// Store backed by a custom region table; malformed entries are skipped
    #[must_use]
    pub fn from_table(table: &[(&str, &str)]) -> Self {
        let mut nodes = BTreeMap::new();
        for (region, json) in table {
            match NodeData::from_json(json) {
                Ok(node) => {
                    let id = format!("{}{SLASH_DELIM}{region}", KeyType::Data.as_str());
                    nodes.insert((*region).to_string(), node.with(AddressDataKey::Id, id));
                }
                Err(e) => warn!(region = %region, error = %e, "skipping malformed bootstrap entry"),
            }
        }
        Self { nodes }
    }

    /// Supported region codes, excluding the default record
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .keys()
            .map(String::as_str)
            .filter(|code| *code != DEFAULT_REGION)
    }

    /// Node for a region code
    #[must_use]
    pub fn country_node(&self, region_code: &str) -> Option<&NodeData> {
        self.nodes.get(region_code)
    }

    /// Node for a serialized country key such as `data/US`.
    ///
    /// A language variant (`data/CA--fr`) resolves to its country's node.
    #[must_use]
    pub fn node_for_key(&self, key: &str) -> Option<&NodeData> {
        let segment = key
            .strip_prefix(KeyType::Data.as_str())?
            .strip_prefix(SLASH_DELIM)?;
        if segment.contains(SLASH_DELIM) {
            return None;
        }
        let region = segment
            .split_once(DASH_DELIM)
            .map_or(segment, |(region, _)| region);
        self.country_node(region)
    }

    /// The `ZZ` default record
    pub fn default_node(&self) -> Result<&NodeData> {
        self.country_node(DEFAULT_REGION)
            .ok_or_else(|| Error::MissingDefaultData(format!("data/{DEFAULT_REGION}")))
    }

    /// Template (or any attribute) of a region, without falling back to defaults
    #[must_use]
    pub fn attribute(&self, region_code: &str, key: AddressDataKey) -> Option<&str> {
        self.country_node(region_code).and_then(|n| n.get(key))
    }

    #[must_use]
    pub fn contains(&self, region_code: &str) -> bool {
        self.nodes.contains_key(region_code)
    }
}

impl Default for MetadataStore {
    fn default() -> Self {
        Self::bootstrap()
    }
}
