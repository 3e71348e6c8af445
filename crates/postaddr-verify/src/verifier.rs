//! Field verifier tree
//!
//! A [`FieldVerifier`] holds the validation rules in force at one node of
//! the address hierarchy. The root is built from the `ZZ` default record;
//! every other verifier is derived from its parent by [`FieldVerifier::refine`],
//! inheriting the parent's field sets and postal-code patterns and replacing
//! whatever the child's metadata overrides. Candidate values are never
//! inherited: they always come from the node's own child lists.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use postaddr_cache::DataSource;
use postaddr_common::key::SLASH_DELIM;
use postaddr_common::language::trim_to_none;
use postaddr_common::{AddressField, AddressProblemType, LookupKey, Result, ScriptType};
use postaddr_metadata::{AddressDataKey, NodeData};
use regex::Regex;
use tracing::{debug, warn};

use crate::problems::AddressProblems;
use crate::template;

/// Serialized key of the default record
pub const DEFAULT_DATA_KEY: &str = "data/ZZ";

/// Validation rules at one node of the hierarchy
#[derive(Clone)]
pub struct FieldVerifier {
    data: Arc<dyn DataSource>,
    /// Key of the node these rules came from; `None` once inheritance
    /// has left the known hierarchy
    id: Option<String>,
    possible: HashSet<AddressField>,
    required: HashSet<AddressField>,
    keys: Arc<[String]>,
    local_names: Arc<[String]>,
    latin_names: Arc<[String]>,
    /// Full-match postal code pattern
    format: Option<Regex>,
    /// Prefix-match postal code pattern
    match_pattern: Option<Regex>,
}

impl FieldVerifier {
    /// Root verifier: default-record rules, every country code as a candidate
    pub fn root(data: Arc<dyn DataSource>) -> Result<Self> {
        let defaults = data.default_data(DEFAULT_DATA_KEY)?;
        let keys: Arc<[String]> = data.country_codes().into();
        let mut root = Self {
            data,
            id: None,
            possible: HashSet::new(),
            required: HashSet::new(),
            keys: Arc::from([]),
            local_names: Arc::from([]),
            latin_names: Arc::from([]),
            format: None,
            match_pattern: None,
        };
        root.apply(&defaults);
        root.id = Some(postaddr_common::KeyType::Data.as_str().to_string());
        root.keys = keys;
        root.local_names = Arc::from([]);
        root.latin_names = Arc::from([]);
        Ok(root)
    }

    /// Verifier for the child named `sublevel`.
    ///
    /// Looks the child up by key, then by Latin name, then by local name.
    /// Never fails: an unknown child yields the parent's rules with no
    /// candidate values.
    pub async fn refine(&self, sublevel: &str) -> Self {
        let Some(sublevel) = trim_to_none(sublevel) else {
            return self.inherit(None);
        };
        let Some(id) = self.id.as_deref() else {
            return self.inherit(None);
        };

        // Keys are looked up as stored, whatever case the caller used.
        let segment = self.key_for(sublevel).unwrap_or(sublevel);
        let mut node = self.data.get(&child_path(id, segment)).await;
        if node.is_none() {
            if let Some(segment) = self.resolve_by_name(sublevel) {
                debug!(parent = %id, sublevel = %sublevel, segment = %segment, "resolved child by name");
                node = self.data.get(&child_path(id, segment)).await;
            }
        }
        if node.is_none() {
            debug!(parent = %id, sublevel = %sublevel, "no data below node, inheriting rules");
        }
        self.inherit(node.as_ref())
    }

    /// Run one check on a field value, recording a problem on failure.
    ///
    /// Returns true when there is no problem. `script` selects which child
    /// names count as known values; `None` accepts either script.
    pub fn check(
        &self,
        script: Option<ScriptType>,
        problem: AddressProblemType,
        field: AddressField,
        value: Option<&str>,
        problems: &mut AddressProblems,
    ) -> bool {
        let value = value.and_then(trim_to_none);
        let ok = match problem {
            AddressProblemType::UsingUnusedField => {
                value.is_none() || self.possible.contains(&field)
            }
            AddressProblemType::MissingRequiredField => {
                value.is_some() || !self.required.contains(&field)
            }
            AddressProblemType::UnknownValue => {
                value.is_none_or(|v| self.is_known_value(script, v))
            }
            AddressProblemType::UnrecognizedFormat => match (value, &self.format) {
                (Some(v), Some(format)) => format.is_match(v),
                _ => true,
            },
            AddressProblemType::MismatchingValue => match (value, &self.match_pattern) {
                (Some(v), Some(pattern)) => pattern.is_match(v),
                _ => true,
            },
        };
        if !ok {
            problems.add(field, problem);
        }
        ok
    }

    /// Key of the node these rules came from
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn data_source(&self) -> &Arc<dyn DataSource> {
        &self.data
    }

    pub fn is_field_used(&self, field: AddressField) -> bool {
        self.possible.contains(&field)
    }

    pub fn is_field_required(&self, field: AddressField) -> bool {
        self.required.contains(&field)
    }

    /// Child key equal to `value` ignoring case, spelled as stored
    pub fn key_for(&self, value: &str) -> Option<&str> {
        position_ignore_case(&self.keys, value.trim())
            .and_then(|i| self.keys.get(i))
            .map(String::as_str)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn local_names(&self) -> &[String] {
        &self.local_names
    }

    pub fn latin_names(&self) -> &[String] {
        &self.latin_names
    }

    /// Child verifier: parent rules, then `node`'s overrides
    fn inherit(&self, node: Option<&NodeData>) -> Self {
        let mut child = Self {
            data: self.data.clone(),
            id: None,
            possible: self.possible.clone(),
            required: self.required.clone(),
            keys: Arc::from([]),
            local_names: Arc::from([]),
            latin_names: Arc::from([]),
            format: self.format.clone(),
            match_pattern: self.match_pattern.clone(),
        };
        if let Some(node) = node {
            child.apply(node);
        }
        child
    }

    fn apply(&mut self, node: &NodeData) {
        if let Some(id) = node.id() {
            self.id = Some(id.to_string());
        }
        if node.contains(AddressDataKey::SubKeys) {
            self.keys = to_shared(node.sub_keys());
        }
        if node.contains(AddressDataKey::SubNames) {
            self.local_names = to_shared(node.sub_names());
        }
        if node.contains(AddressDataKey::SubLnames) {
            self.latin_names = to_shared(node.sub_lnames());
        }
        if let Some(fmt) = node.get(AddressDataKey::Fmt) {
            self.possible = possible_fields(fmt);
        }
        if let Some(require) = node.get(AddressDataKey::Require) {
            self.required = required_fields(require);
        }
        // At country level `zip` is the full format of a postal code; below it
        // the same attribute is a prefix the code must start with.
        if let Some(zip) = node.get(AddressDataKey::Zip) {
            if self.is_country_node() {
                self.format = compile_full(zip);
            } else {
                self.match_pattern = compile_prefix(zip);
            }
        }
        if let Some(xzip) = node.get(AddressDataKey::Xzip) {
            self.format = compile_full(xzip);
        }
    }

    fn is_country_node(&self) -> bool {
        self.id
            .as_deref()
            .and_then(|id| LookupKey::parse(id).ok())
            .is_some_and(|key| key.is_country_key())
    }

    /// Child segment for a sublevel given by name rather than key
    fn resolve_by_name(&self, sublevel: &str) -> Option<&str> {
        if let Some(i) = position_ignore_case(&self.latin_names, sublevel) {
            return self.local_names.get(i).or_else(|| self.keys.get(i)).map(String::as_str);
        }
        position_ignore_case(&self.local_names, sublevel)
            .and_then(|i| self.keys.get(i))
            .map(String::as_str)
    }

    fn is_known_value(&self, script: Option<ScriptType>, value: &str) -> bool {
        let names: Vec<&[String]> = match script {
            None => vec![&self.local_names[..], &self.latin_names[..]],
            Some(ScriptType::Local) => vec![&self.local_names[..]],
            // Regions without romanized names are already written in Latin script.
            Some(ScriptType::Latin) if self.latin_names.is_empty() => vec![&self.local_names[..]],
            Some(ScriptType::Latin) => vec![&self.latin_names[..]],
        };
        if self.keys.is_empty() && names.iter().all(|n| n.is_empty()) {
            return true;
        }
        position_ignore_case(&self.keys, value).is_some()
            || names.iter().any(|n| position_ignore_case(n, value).is_some())
    }
}

impl fmt::Debug for FieldVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldVerifier")
            .field("id", &self.id)
            .field("keys", &self.keys.len())
            .field("format", &self.format.as_ref().map(Regex::as_str))
            .field("match_pattern", &self.match_pattern.as_ref().map(Regex::as_str))
            .finish_non_exhaustive()
    }
}

fn child_path(id: &str, sublevel: &str) -> String {
    format!("{id}{SLASH_DELIM}{sublevel}")
}

fn to_shared(values: Vec<&str>) -> Arc<[String]> {
    values.into_iter().map(str::to_string).collect()
}

fn position_ignore_case(values: &[String], value: &str) -> Option<usize> {
    let value = value.to_lowercase();
    values.iter().position(|v| v.to_lowercase() == value)
}

/// Fields a template uses. Country is always possible and the street
/// address brings both address lines with it.
fn possible_fields(fmt: &str) -> HashSet<AddressField> {
    let mut fields: HashSet<AddressField> = template::fields(fmt).into_iter().collect();
    fields.insert(AddressField::Country);
    if fields.contains(&AddressField::StreetAddress) {
        fields.insert(AddressField::AddressLine1);
        fields.insert(AddressField::AddressLine2);
    }
    fields
}

fn required_fields(require: &str) -> HashSet<AddressField> {
    let mut fields: HashSet<AddressField> = AddressField::parse_codes(require).into_iter().collect();
    fields.insert(AddressField::Country);
    fields
}

fn compile_full(pattern: &str) -> Option<Regex> {
    compile(pattern, &format!("(?i)^(?:{pattern})$"))
}

fn compile_prefix(pattern: &str) -> Option<Regex> {
    compile(pattern, &format!("(?i)^(?:{pattern})"))
}

fn compile(pattern: &str, anchored: &str) -> Option<Regex> {
    match Regex::new(anchored) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!(pattern = %pattern, error = %e, "ignoring malformed postal code pattern");
            None
        }
    }
}
