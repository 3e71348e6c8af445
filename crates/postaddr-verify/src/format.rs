//! Region templates: field order and envelope rendering

use std::sync::Arc;

use postaddr_common::language::is_explicit_latin_script;
use postaddr_common::{AddressData, AddressField, Error, FormOptions, Result, ScriptType};
use postaddr_metadata::store::DEFAULT_REGION;
use postaddr_metadata::{AddressDataKey, MetadataStore};

use crate::template::{self, Token};

/// Interprets the `fmt`/`lfmt` templates of the bootstrap data
#[derive(Clone, Debug)]
pub struct FormatInterpreter {
    store: Arc<MetadataStore>,
    options: FormOptions,
}

impl FormatInterpreter {
    pub fn new(store: Arc<MetadataStore>, options: FormOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Template for a region.
    ///
    /// Latin script prefers `lfmt`; regions without a template of their own
    /// use the default record's.
    pub fn template(&self, script: ScriptType, region_code: &str) -> Result<&str> {
        let region = region_code.to_ascii_uppercase();
        let latin = match script {
            ScriptType::Latin => self.store.attribute(&region, AddressDataKey::Lfmt),
            ScriptType::Local => None,
        };
        if let Some(fmt) = latin.or_else(|| self.store.attribute(&region, AddressDataKey::Fmt)) {
            return Ok(fmt);
        }
        self.store
            .default_node()?
            .get(AddressDataKey::Fmt)
            .ok_or_else(|| Error::MissingDefaultData(format!("data/{DEFAULT_REGION} has no template")))
    }

    /// Fields of a region in display order.
    ///
    /// Never contains [`AddressField::StreetAddress`] (it is expanded into
    /// both address lines) and never repeats a field.
    pub fn field_order(&self, script: ScriptType, region_code: &str) -> Result<Vec<AddressField>> {
        let mut order = template::fields(self.template(script, region_code)?);
        if let Some(custom) = self
            .options
            .custom_field_order(&region_code.to_ascii_uppercase())
        {
            apply_custom_order(&mut order, custom);
        }
        Ok(expand_street_address(order))
    }

    /// Render an address as envelope lines. Empty lines are dropped and the
    /// country is never printed.
    pub fn envelope(&self, address: &AddressData) -> Result<Vec<String>> {
        let region = address.postal_country().unwrap_or(DEFAULT_REGION);
        let script = match address.language_code() {
            Some(lang) if is_explicit_latin_script(lang) => ScriptType::Latin,
            _ => ScriptType::Local,
        };

        let mut lines = Vec::new();
        let mut current = String::new();
        for token in template::tokenize(self.template(script, region)?) {
            match token {
                Token::Newline => flush(&mut lines, &mut current),
                Token::Literal(text) => current.push_str(text),
                Token::Field(AddressField::Country) => {}
                Token::Field(AddressField::StreetAddress) => {
                    let street = address.street_address().unwrap_or_default();
                    for (i, line) in street.lines().enumerate() {
                        if i > 0 {
                            flush(&mut lines, &mut current);
                        }
                        current.push_str(line);
                    }
                }
                Token::Field(field) => {
                    if let Some(value) = address.field_value(field) {
                        current.push_str(value);
                    }
                }
            }
        }
        flush(&mut lines, &mut current);
        Ok(lines)
    }
}

/// Move the fields named in `custom` into that relative order, using the
/// slots they already occupy. Fields the template lacks are ignored.
fn apply_custom_order(order: &mut [AddressField], custom: &[AddressField]) {
    let mut wanted = Vec::new();
    for field in custom {
        let field = match field {
            AddressField::AddressLine1 | AddressField::AddressLine2 => AddressField::StreetAddress,
            other => *other,
        };
        if order.contains(&field) && !wanted.contains(&field) {
            wanted.push(field);
        }
    }
    let slots: Vec<usize> = order
        .iter()
        .enumerate()
        .filter(|(_, field)| wanted.contains(field))
        .map(|(i, _)| i)
        .collect();
    for (slot, field) in slots.into_iter().zip(wanted) {
        order[slot] = field;
    }
}

fn expand_street_address(order: Vec<AddressField>) -> Vec<AddressField> {
    let mut expanded = Vec::with_capacity(order.len() + 1);
    for field in order {
        if field == AddressField::StreetAddress {
            expanded.push(AddressField::AddressLine1);
            expanded.push(AddressField::AddressLine2);
        } else {
            expanded.push(field);
        }
    }
    expanded
}

fn flush(lines: &mut Vec<String>, current: &mut String) {
    let line = normalize_line(current);
    current.clear();
    if !line.is_empty() {
        lines.push(line);
    }
}

/// Collapse whitespace and drop separators left dangling by absent fields
fn normalize_line(line: &str) -> String {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_start_matches(|c: char| c == ',' || c == '-' || c.is_whitespace())
        .to_string()
}
