//! Metadata node records
//!
//! A node is a JSON object of string attributes such as
//! `{"id":"data/US","fmt":"%N%n%O%n%A%n%C, %S %Z","require":"ACSZ"}`.
//! List-valued attributes (`sub_keys`, `sub_names`, ...) are `~`-delimited
//! and positionally aligned: entry `i` of every `sub_*` list describes the
//! same child.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use postaddr_common::{Error, Result};
use serde_json::{Map, Value};
use tracing::trace;

/// Delimiter of list-valued attributes
pub const LIST_DELIM: char = '~';

/// Known node attributes; the JSON key is the lower-cased name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressDataKey {
    /// Country codes known to the root node
    Countries,
    /// Local-script address template
    Fmt,
    /// Identity of the node; its serialized lookup key
    Id,
    /// ISO 3166-2 code of the node
    Isoid,
    /// Key of the node within its parent
    Key,
    /// Default language of the node's data
    Lang,
    /// Languages with their own data variant, default first
    Languages,
    /// Latin-script address template
    Lfmt,
    /// Latin-script name of the node
    Lname,
    /// Label type for the locality field
    LocalityNameType,
    /// Local-script name of the node
    Name,
    /// Literal printed before the postal code
    Postprefix,
    /// Postal authority lookup page
    Posturl,
    /// Codes of required fields
    Require,
    /// Label type for the admin area field
    StateNameType,
    /// Label type for the dependent locality field
    SublocalityNameType,
    /// ISO codes of the children
    SubIsoids,
    /// Keys of the children
    SubKeys,
    /// Latin-script names of the children
    SubLnames,
    /// Whether each child has children of its own
    SubMores,
    /// Local-script names of the children
    SubNames,
    /// Example postal codes of the children
    SubZipexs,
    /// Postal code prefixes of the children
    SubZips,
    /// Codes of fields rendered in upper case
    Upper,
    /// Per-field display width overrides
    WidthOverrides,
    /// Full postal code format pattern, valid at any depth
    Xzip,
    /// Postal code pattern: a format at country depth, a prefix match below it
    Zip,
    /// Label type for the postal code field
    ZipNameType,
    /// Example postal codes
    Zipex,
}

impl AddressDataKey {
    pub const ALL: [Self; 29] = [
        Self::Countries,
        Self::Fmt,
        Self::Id,
        Self::Isoid,
        Self::Key,
        Self::Lang,
        Self::Languages,
        Self::Lfmt,
        Self::Lname,
        Self::LocalityNameType,
        Self::Name,
        Self::Postprefix,
        Self::Posturl,
        Self::Require,
        Self::StateNameType,
        Self::SublocalityNameType,
        Self::SubIsoids,
        Self::SubKeys,
        Self::SubLnames,
        Self::SubMores,
        Self::SubNames,
        Self::SubZipexs,
        Self::SubZips,
        Self::Upper,
        Self::WidthOverrides,
        Self::Xzip,
        Self::Zip,
        Self::ZipNameType,
        Self::Zipex,
    ];

    /// JSON attribute name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Countries => "countries",
            Self::Fmt => "fmt",
            Self::Id => "id",
            Self::Isoid => "isoid",
            Self::Key => "key",
            Self::Lang => "lang",
            Self::Languages => "languages",
            Self::Lfmt => "lfmt",
            Self::Lname => "lname",
            Self::LocalityNameType => "locality_name_type",
            Self::Name => "name",
            Self::Postprefix => "postprefix",
            Self::Posturl => "posturl",
            Self::Require => "require",
            Self::StateNameType => "state_name_type",
            Self::SublocalityNameType => "sublocality_name_type",
            Self::SubIsoids => "sub_isoids",
            Self::SubKeys => "sub_keys",
            Self::SubLnames => "sub_lnames",
            Self::SubMores => "sub_mores",
            Self::SubNames => "sub_names",
            Self::SubZipexs => "sub_zipexs",
            Self::SubZips => "sub_zips",
            Self::Upper => "upper",
            Self::WidthOverrides => "width_overrides",
            Self::Xzip => "xzip",
            Self::Zip => "zip",
            Self::ZipNameType => "zip_name_type",
            Self::Zipex => "zipex",
        }
    }
}

impl FromStr for AddressDataKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| Error::malformed(format!("unknown attribute: {s}")))
    }
}

impl fmt::Display for AddressDataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one node of the address hierarchy
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeData {
    attributes: BTreeMap<AddressDataKey, String>,
}

impl NodeData {
    /// Create an empty node
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object blob.
    ///
    /// Unknown attributes are ignored. Scalar non-string values are kept in
    /// their JSON text form; arrays and objects are dropped.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::malformed(e.to_string()))?;
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(Error::malformed(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    fn from_map(map: Map<String, Value>) -> Self {
        let mut attributes = BTreeMap::new();
        for (name, value) in map {
            let Ok(key) = name.parse::<AddressDataKey>() else {
                trace!(attribute = %name, "ignoring unknown metadata attribute");
                continue;
            };
            let text = match value {
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => continue,
            };
            attributes.insert(key, text);
        }
        Self { attributes }
    }

    /// Serialize back to a JSON object
    #[must_use]
    pub fn to_json(&self) -> String {
        let map: Map<String, Value> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), Value::String(v.clone())))
            .collect();
        Value::Object(map).to_string()
    }

    /// Set an attribute, returning the updated node
    #[must_use]
    pub fn with(mut self, key: AddressDataKey, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: AddressDataKey) -> Option<&str> {
        self.attributes.get(&key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: AddressDataKey) -> bool {
        self.attributes.contains_key(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The identity marker, e.g. `data/US`
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get(AddressDataKey::Id)
    }

    /// Split a `~`-delimited attribute; absent or empty attributes give an empty list
    #[must_use]
    pub fn list(&self, key: AddressDataKey) -> Vec<&str> {
        match self.get(key) {
            Some(v) if !v.is_empty() => v.split(LIST_DELIM).collect(),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn sub_keys(&self) -> Vec<&str> {
        self.list(AddressDataKey::SubKeys)
    }

    #[must_use]
    pub fn sub_names(&self) -> Vec<&str> {
        self.list(AddressDataKey::SubNames)
    }

    #[must_use]
    pub fn sub_lnames(&self) -> Vec<&str> {
        self.list(AddressDataKey::SubLnames)
    }

    /// Flags for which children have further children.
    ///
    /// A single flag applies to every child.
    #[must_use]
    pub fn sub_mores(&self) -> Vec<bool> {
        let mores: Vec<bool> = self
            .list(AddressDataKey::SubMores)
            .into_iter()
            .map(|m| m.eq_ignore_ascii_case("true"))
            .collect();
        let children = self.sub_keys().len();
        match mores.as_slice() {
            [single] if children > 1 => vec![*single; children],
            _ => mores,
        }
    }

    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.list(AddressDataKey::Languages)
    }

    /// Iterate over all attributes
    pub fn iter(&self) -> impl Iterator<Item = (AddressDataKey, &str)> {
        self.attributes.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Merge freshly fetched node data over existing partial data.
///
/// Every attribute of `fresh` is kept; attributes of `existing` survive only
/// where `fresh` does not supply them.
#[must_use]
pub fn merge(fresh: &NodeData, existing: &NodeData) -> NodeData {
    let mut attributes = fresh.attributes.clone();
    for (key, value) in &existing.attributes {
        attributes.entry(*key).or_insert_with(|| value.clone());
    }
    NodeData { attributes }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_attributes() {
        let node = NodeData::from_json(
            r#"{"id":"data/US","fmt":"%N%n%O%n%A%n%C, %S %Z","require":"ACSZ",
                "zip":"(\\d{5})(?:[ \\-](\\d{4}))?","bogus":"x"}"#,
        )
        .unwrap();
        assert_eq!(node.id(), Some("data/US"));
        assert_eq!(node.get(AddressDataKey::Require), Some("ACSZ"));
        assert_eq!(
            node.get(AddressDataKey::Zip),
            Some(r"(\d{5})(?:[ \-](\d{4}))?")
        );
        assert_eq!(node.len(), 4);
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(matches!(
            NodeData::from_json("[1,2]"),
            Err(Error::MalformedNode(_))
        ));
        assert!(NodeData::from_json("{not json").is_err());
    }

    #[test]
    fn test_scalar_values_are_stringified() {
        let node = NodeData::from_json(r#"{"id":"data/XX","sub_mores":true,"zip":null}"#).unwrap();
        assert_eq!(node.get(AddressDataKey::SubMores), Some("true"));
        assert!(!node.contains(AddressDataKey::Zip));
    }

    #[test]
    fn test_lists_are_aligned() {
        let node = NodeData::new()
            .with(AddressDataKey::SubKeys, "Gangwon-do~Seoul")
            .with(AddressDataKey::SubNames, "강원도~서울특별시")
            .with(AddressDataKey::SubLnames, "Gangwon-do~Seoul");
        assert_eq!(node.sub_keys(), vec!["Gangwon-do", "Seoul"]);
        assert_eq!(node.sub_names(), vec!["강원도", "서울특별시"]);
        assert_eq!(node.sub_keys().len(), node.sub_lnames().len());
        assert!(node.list(AddressDataKey::SubZips).is_empty());
    }

    #[test]
    fn test_single_sub_more_applies_to_all_children() {
        let node = NodeData::new()
            .with(AddressDataKey::SubKeys, "A~B~C")
            .with(AddressDataKey::SubMores, "true");
        assert_eq!(node.sub_mores(), vec![true, true, true]);

        let node = NodeData::new()
            .with(AddressDataKey::SubKeys, "A~B")
            .with(AddressDataKey::SubMores, "false~TRUE");
        assert_eq!(node.sub_mores(), vec![false, true]);
    }

    #[test]
    fn test_merge_fresh_wins_existing_fills_gaps() {
        let existing = NodeData::new()
            .with(AddressDataKey::Fmt, "%N%n%A%n%C")
            .with(AddressDataKey::Zipex, "00000");
        let fresh = NodeData::new()
            .with(AddressDataKey::Id, "data/US")
            .with(AddressDataKey::Zipex, "95014");
        let merged = merge(&fresh, &existing);
        assert_eq!(merged.id(), Some("data/US"));
        assert_eq!(merged.get(AddressDataKey::Zipex), Some("95014"));
        assert_eq!(merged.get(AddressDataKey::Fmt), Some("%N%n%A%n%C"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let node = NodeData::new()
            .with(AddressDataKey::Id, "data/CH")
            .with(AddressDataKey::Fmt, "%O%n%N%n%A%nCH-%Z %C")
            .with(AddressDataKey::Zip, r"\d{4}");
        assert_eq!(NodeData::from_json(&node.to_json()).unwrap(), node);
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(
            "SUB_LNAMES".parse::<AddressDataKey>().unwrap(),
            AddressDataKey::SubLnames
        );
        for key in AddressDataKey::ALL {
            assert_eq!(key.as_str().parse::<AddressDataKey>().unwrap(), key);
        }
    }
}
