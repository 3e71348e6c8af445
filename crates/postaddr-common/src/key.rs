//! Hierarchical lookup keys
//!
//! A [`LookupKey`] names one node of the metadata hierarchy. Its canonical
//! string form is also the path requested from the metadata service:
//!
//! ```text
//! data[/COUNTRY[--lang]][/ADMIN_AREA][/LOCALITY][/DEPENDENT_LOCALITY]
//! examples/COUNTRY/(local|latin)/(lang|_default)
//! ```
//!
//! Keys are immutable; navigating to ancestors derives new keys.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::address::AddressData;
use crate::error::{Error, Result};
use crate::field::{AddressField, ScriptType};
use crate::language::is_explicit_latin_script;

/// Separator between key segments
pub const SLASH_DELIM: &str = "/";
/// Separator between a country code and a language code
pub const DASH_DELIM: &str = "--";
/// Language segment of an examples key with no explicit language
pub const DEFAULT_LANGUAGE: &str = "_default";

/// Family a key belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Address metadata
    Data,
    /// Example addresses
    Examples,
}

impl KeyType {
    /// Leading segment of keys of this type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Examples => "examples",
        }
    }
}

/// Identifier of a node in the address metadata hierarchy
#[derive(Clone)]
pub struct LookupKey {
    key_type: KeyType,
    script: ScriptType,
    /// Values for a contiguous prefix of [`AddressField::HIERARCHY`]
    nodes: Vec<String>,
    language_code: Option<String>,
    key_string: String,
}

impl LookupKey {
    /// The root data key, `data`
    #[must_use]
    pub fn root() -> Self {
        Self::new(KeyType::Data, ScriptType::Local, Vec::new(), None)
    }

    /// Parse a serialized key such as `data/US/CA` or `examples/CN/latin/_default`
    pub fn parse(key: &str) -> Result<Self> {
        let parts: Vec<&str> = key.split(SLASH_DELIM).collect();
        match parts[0] {
            "data" => Self::parse_data(key, &parts),
            "examples" => Self::parse_examples(key, &parts),
            other => Err(Error::invalid_key(format!("wrong key type: {other}"))),
        }
    }

    fn parse_data(key: &str, parts: &[&str]) -> Result<Self> {
        if parts.len() > AddressField::HIERARCHY.len() + 1 {
            return Err(Error::invalid_key(format!(
                "'{key}' is deeper than the supported hierarchy"
            )));
        }

        let mut nodes = Vec::new();
        let mut language_code = None;
        if let Some(country) = parts.get(1).copied().filter(|p| !p.is_empty()) {
            let country = if let Some((code, lang)) = country.split_once(DASH_DELIM) {
                if code.is_empty() || lang.is_empty() || lang.contains(DASH_DELIM) {
                    return Err(Error::invalid_key(format!(
                        "'{country}' should be country code--language code"
                    )));
                }
                language_code = Some(lang.to_string());
                code
            } else {
                country
            };
            nodes.push(country.to_string());

            // An empty segment truncates everything below it.
            for part in parts[2..].iter().take_while(|p| !p.is_empty()) {
                nodes.push((*part).to_string());
            }
        }

        Ok(Self::new(KeyType::Data, ScriptType::Local, nodes, language_code))
    }

    fn parse_examples(key: &str, parts: &[&str]) -> Result<Self> {
        match parts.len() {
            1 => Ok(Self::new(KeyType::Examples, ScriptType::Local, Vec::new(), None)),
            4 => {
                let country = Some(parts[1]).filter(|p| !p.is_empty()).ok_or_else(|| {
                    Error::invalid_key(format!("'{key}' has an empty country segment"))
                })?;
                let script: ScriptType = parts[2].parse()?;
                let language_code = match parts[3] {
                    DEFAULT_LANGUAGE | "" => None,
                    lang => Some(lang.to_string()),
                };
                Ok(Self::new(
                    KeyType::Examples,
                    script,
                    vec![country.to_string()],
                    language_code,
                ))
            }
            _ => Err(Error::invalid_key(format!(
                "'{key}' should be examples/country/script/language"
            ))),
        }
    }

    /// Build the data key for an address, stopping at its first absent hierarchy field
    #[must_use]
    pub fn from_address(address: &AddressData) -> Self {
        let nodes = AddressField::HIERARCHY
            .iter()
            .map_while(|field| address.field_value(*field).map(str::to_string))
            .collect();
        let language_code = address.language_code().map(str::to_string);
        let script = match &language_code {
            Some(lang) if is_explicit_latin_script(lang) => ScriptType::Latin,
            _ => ScriptType::Local,
        };
        Self::new(KeyType::Data, script, nodes, language_code)
    }

    fn new(
        key_type: KeyType,
        script: ScriptType,
        nodes: Vec<String>,
        language_code: Option<String>,
    ) -> Self {
        // A language suffix only exists on a country segment.
        let language_code = if nodes.is_empty() { None } else { language_code };
        let key_string = Self::create_key_string(key_type, script, &nodes, language_code.as_deref());
        Self {
            key_type,
            script,
            nodes,
            language_code,
            key_string,
        }
    }

    fn create_key_string(
        key_type: KeyType,
        script: ScriptType,
        nodes: &[String],
        language_code: Option<&str>,
    ) -> String {
        let mut key = String::from(key_type.as_str());
        match key_type {
            KeyType::Data => {
                for (depth, value) in nodes.iter().enumerate() {
                    key.push_str(SLASH_DELIM);
                    key.push_str(value);
                    if depth == 0 {
                        if let Some(lang) = language_code {
                            key.push_str(DASH_DELIM);
                            key.push_str(lang);
                        }
                    }
                }
            }
            KeyType::Examples => {
                if let Some(country) = nodes.first() {
                    key.push_str(SLASH_DELIM);
                    key.push_str(country);
                    key.push_str(SLASH_DELIM);
                    key.push_str(&script.to_string());
                    key.push_str(SLASH_DELIM);
                    key.push_str(language_code.unwrap_or(DEFAULT_LANGUAGE));
                }
            }
        }
        key
    }

    #[must_use]
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Script tag; only meaningful for examples keys
    #[must_use]
    pub fn script(&self) -> ScriptType {
        self.script
    }

    #[must_use]
    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    /// Number of hierarchy segments present (0 for the root)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    /// True for a data key naming exactly one country
    #[must_use]
    pub fn is_country_key(&self) -> bool {
        self.key_type == KeyType::Data && self.nodes.len() == 1
    }

    /// Value of a hierarchy segment, if present
    #[must_use]
    pub fn value_for_field(&self, field: AddressField) -> Option<&str> {
        field
            .hierarchy_depth()
            .and_then(|depth| self.nodes.get(depth))
            .map(String::as_str)
    }

    /// Key truncated to the depth of `field`.
    ///
    /// Returns `None` for examples keys, for fields outside the hierarchy
    /// and for fields more granular than this key.
    #[must_use]
    pub fn ancestor_key(&self, field: AddressField) -> Option<Self> {
        if self.key_type != KeyType::Data {
            return None;
        }
        let depth = field.hierarchy_depth()?;
        if depth >= self.nodes.len() {
            return None;
        }
        Some(Self::new(
            self.key_type,
            self.script,
            self.nodes[..=depth].to_vec(),
            self.language_code.clone(),
        ))
    }

    /// Key with the most granular segment removed; `None` at the root
    #[must_use]
    pub fn parent_key(&self) -> Option<Self> {
        if self.key_type != KeyType::Data || self.nodes.is_empty() {
            return None;
        }
        let mut nodes = self.nodes.clone();
        nodes.pop();
        Some(Self::new(
            self.key_type,
            self.script,
            nodes,
            self.language_code.clone(),
        ))
    }

    /// Key of a child node one level below this one
    pub fn child_key(&self, sublevel: &str) -> Result<Self> {
        Self::parse(&format!("{}{SLASH_DELIM}{sublevel}", self.key_string))
    }

    /// The examples key for this key's country, carrying its script tag
    #[must_use]
    pub fn to_examples_key(&self) -> Self {
        Self::new(
            KeyType::Examples,
            self.script,
            self.nodes.first().cloned().into_iter().collect(),
            self.language_code.clone(),
        )
    }

    /// Canonical serialization
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.key_string
    }
}

impl PartialEq for LookupKey {
    fn eq(&self, other: &Self) -> bool {
        self.key_string == other.key_string
    }
}

impl Eq for LookupKey {}

impl Hash for LookupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_string.hash(state);
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key_string)
    }
}

impl fmt::Debug for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LookupKey({:?})", self.key_string)
    }
}

impl FromStr for LookupKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
