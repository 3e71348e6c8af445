//! Immutable address record
//!
//! An [`AddressData`] holds at most one trimmed, non-empty value per
//! [`AddressField`]. Empty or whitespace-only input is stored as absence.
//! Records are built once through [`AddressDataBuilder`]; copies are made by
//! seeding a new builder from an existing record.

use std::collections::BTreeMap;
use std::fmt;

use crate::field::AddressField;
use crate::language::trim_to_none;

/// A postal address
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AddressData {
    values: BTreeMap<AddressField, String>,
    language_code: Option<String>,
}

impl AddressData {
    /// Start building a new address
    #[must_use]
    pub fn builder() -> AddressDataBuilder {
        AddressDataBuilder::new()
    }

    /// Value stored for a field.
    ///
    /// [`AddressField::StreetAddress`] is an alias for the first address line
    /// here; use [`AddressData::street_address`] for both lines.
    #[must_use]
    pub fn field_value(&self, field: AddressField) -> Option<&str> {
        let field = match field {
            AddressField::StreetAddress => AddressField::AddressLine1,
            other => other,
        };
        self.values.get(&field).map(String::as_str)
    }

    /// Region code of the country, e.g. `US`
    #[must_use]
    pub fn postal_country(&self) -> Option<&str> {
        self.field_value(AddressField::Country)
    }

    #[must_use]
    pub fn administrative_area(&self) -> Option<&str> {
        self.field_value(AddressField::AdminArea)
    }

    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        self.field_value(AddressField::Locality)
    }

    #[must_use]
    pub fn dependent_locality(&self) -> Option<&str> {
        self.field_value(AddressField::DependentLocality)
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.field_value(AddressField::PostalCode)
    }

    #[must_use]
    pub fn sorting_code(&self) -> Option<&str> {
        self.field_value(AddressField::SortingCode)
    }

    #[must_use]
    pub fn address_line_1(&self) -> Option<&str> {
        self.field_value(AddressField::AddressLine1)
    }

    #[must_use]
    pub fn address_line_2(&self) -> Option<&str> {
        self.field_value(AddressField::AddressLine2)
    }

    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.field_value(AddressField::Organization)
    }

    #[must_use]
    pub fn recipient(&self) -> Option<&str> {
        self.field_value(AddressField::Recipient)
    }

    /// BCP 47 language tag the address is written in
    #[must_use]
    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    /// Both street address lines joined with a newline, skipping absent lines
    #[must_use]
    pub fn street_address(&self) -> Option<String> {
        let lines: Vec<&str> = [self.address_line_1(), self.address_line_2()]
            .into_iter()
            .flatten()
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    /// Iterate over the populated fields
    pub fn iter(&self) -> impl Iterator<Item = (AddressField, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

impl fmt::Debug for AddressData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, value) in &self.values {
            map.entry(&field.name(), value);
        }
        if let Some(lang) = &self.language_code {
            map.entry(&"language_code", lang);
        }
        map.finish()
    }
}

/// Builder for [`AddressData`]
#[derive(Clone, Debug, Default)]
pub struct AddressDataBuilder {
    values: BTreeMap<AddressField, String>,
    language_code: Option<String>,
}

impl AddressDataBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    ///
    /// Values are trimmed and empty values clear the field. Setting
    /// [`AddressField::AddressLine1`] (or the deprecated
    /// [`AddressField::StreetAddress`]) from a multi-line string keeps the
    /// first line there and moves the remaining lines to address line 2.
    #[must_use]
    pub fn set(mut self, field: AddressField, value: impl AsRef<str>) -> Self {
        match field {
            AddressField::StreetAddress | AddressField::AddressLine1 => {
                self.set_street_lines(value.as_ref());
            }
            other => self.put(other, value.as_ref()),
        }
        self
    }

    #[must_use]
    pub fn set_country(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::Country, value)
    }

    #[must_use]
    pub fn set_admin_area(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::AdminArea, value)
    }

    #[must_use]
    pub fn set_locality(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::Locality, value)
    }

    #[must_use]
    pub fn set_dependent_locality(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::DependentLocality, value)
    }

    #[must_use]
    pub fn set_postal_code(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::PostalCode, value)
    }

    #[must_use]
    pub fn set_sorting_code(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::SortingCode, value)
    }

    #[must_use]
    pub fn set_address_line_1(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::AddressLine1, value)
    }

    #[must_use]
    pub fn set_address_line_2(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::AddressLine2, value)
    }

    #[must_use]
    pub fn set_organization(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::Organization, value)
    }

    #[must_use]
    pub fn set_recipient(self, value: impl AsRef<str>) -> Self {
        self.set(AddressField::Recipient, value)
    }

    /// Set the language tag; empty clears it
    #[must_use]
    pub fn set_language_code(mut self, value: impl AsRef<str>) -> Self {
        self.language_code = trim_to_none(value.as_ref()).map(str::to_string);
        self
    }

    /// Build the record, promoting address line 2 when line 1 is absent
    #[must_use]
    pub fn build(mut self) -> AddressData {
        if !self.values.contains_key(&AddressField::AddressLine1) {
            if let Some(line2) = self.values.remove(&AddressField::AddressLine2) {
                self.values.insert(AddressField::AddressLine1, line2);
            }
        }
        AddressData {
            values: self.values,
            language_code: self.language_code,
        }
    }

    fn put(&mut self, field: AddressField, value: &str) {
        match trim_to_none(value) {
            Some(v) => {
                self.values.insert(field, v.to_string());
            }
            None => {
                self.values.remove(&field);
            }
        }
    }

    fn set_street_lines(&mut self, value: &str) {
        let mut lines = value.lines().filter_map(trim_to_none);
        let Some(first) = lines.next() else {
            self.values.remove(&AddressField::AddressLine1);
            return;
        };
        self.values
            .insert(AddressField::AddressLine1, first.to_string());
        let rest: Vec<&str> = lines.collect();
        if !rest.is_empty() {
            self.values
                .insert(AddressField::AddressLine2, rest.join("\n"));
        }
    }
}

impl From<&AddressData> for AddressDataBuilder {
    fn from(address: &AddressData) -> Self {
        Self {
            values: address.values.clone(),
            language_code: address.language_code.clone(),
        }
    }
}
