//! Address field enumerations
//!
//! Every address component has a single-character code. The codes are the
//! ones used by the per-country template strings (`%N%n%O%n%A%n%C`) and by
//! the `require`/`upper` metadata attributes.

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A component of a postal address
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressField {
    /// Region code of the country (`R`)
    Country,
    /// Top-level administrative subdivision, e.g. state or province (`S`)
    AdminArea,
    /// City or town (`C`)
    Locality,
    /// Sublocality, district or suburb (`D`)
    DependentLocality,
    /// Postal or ZIP code (`Z`)
    PostalCode,
    /// Sorting code, e.g. the French CEDEX (`X`)
    SortingCode,
    /// Deprecated combined street address (`A`).
    ///
    /// Only appears in templates; it always expands to
    /// [`AddressField::AddressLine1`] followed by [`AddressField::AddressLine2`].
    StreetAddress,
    /// First street address line (`1`)
    AddressLine1,
    /// Second street address line (`2`)
    AddressLine2,
    /// Firm or organization (`O`)
    Organization,
    /// Name of the recipient (`N`)
    Recipient,
}

impl AddressField {
    /// All fields, in declaration order
    pub const ALL: [Self; 11] = [
        Self::Country,
        Self::AdminArea,
        Self::Locality,
        Self::DependentLocality,
        Self::PostalCode,
        Self::SortingCode,
        Self::StreetAddress,
        Self::AddressLine1,
        Self::AddressLine2,
        Self::Organization,
        Self::Recipient,
    ];

    /// Fields that form the region hierarchy, from coarsest to finest
    pub const HIERARCHY: [Self; 4] = [
        Self::Country,
        Self::AdminArea,
        Self::Locality,
        Self::DependentLocality,
    ];

    /// Single-character code used in templates and metadata
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Country => 'R',
            Self::AdminArea => 'S',
            Self::Locality => 'C',
            Self::DependentLocality => 'D',
            Self::PostalCode => 'Z',
            Self::SortingCode => 'X',
            Self::StreetAddress => 'A',
            Self::AddressLine1 => '1',
            Self::AddressLine2 => '2',
            Self::Organization => 'O',
            Self::Recipient => 'N',
        }
    }

    /// Look up a field by its single-character code
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'R' => Some(Self::Country),
            'S' => Some(Self::AdminArea),
            'C' => Some(Self::Locality),
            'D' => Some(Self::DependentLocality),
            'Z' => Some(Self::PostalCode),
            'X' => Some(Self::SortingCode),
            'A' => Some(Self::StreetAddress),
            '1' => Some(Self::AddressLine1),
            '2' => Some(Self::AddressLine2),
            'O' => Some(Self::Organization),
            'N' => Some(Self::Recipient),
            _ => None,
        }
    }

    /// Upper-case name, e.g. `ADMIN_AREA`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Country => "COUNTRY",
            Self::AdminArea => "ADMIN_AREA",
            Self::Locality => "LOCALITY",
            Self::DependentLocality => "DEPENDENT_LOCALITY",
            Self::PostalCode => "POSTAL_CODE",
            Self::SortingCode => "SORTING_CODE",
            Self::StreetAddress => "STREET_ADDRESS",
            Self::AddressLine1 => "ADDRESS_LINE_1",
            Self::AddressLine2 => "ADDRESS_LINE_2",
            Self::Organization => "ORGANIZATION",
            Self::Recipient => "RECIPIENT",
        }
    }

    /// Position of this field in the region hierarchy (country is 0)
    #[must_use]
    pub fn hierarchy_depth(self) -> Option<usize> {
        Self::HIERARCHY.iter().position(|f| *f == self)
    }

    /// Parse a string of field codes such as `ACSZ`, skipping unknown codes
    #[must_use]
    pub fn parse_codes(codes: &str) -> Vec<Self> {
        codes.chars().filter_map(Self::from_code).collect()
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AddressField {
    type Err = Error;

    /// Accepts either the single-character code or the upper-case name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(field) = Self::from_code(c) {
                return Ok(field);
            }
        }
        let upper = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == upper)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

impl Serialize for AddressField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.code())
    }
}

impl<'de> Deserialize<'de> for AddressField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Writing system of the metadata being used
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum ScriptType {
    /// Native script of the region
    #[default]
    #[display("local")]
    Local,
    /// Romanized rendering
    #[display("latin")]
    Latin,
}

impl FromStr for ScriptType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "latin" => Ok(Self::Latin),
            other => Err(Error::InvalidKeyFormat(format!(
                "script must be \"local\" or \"latin\", got \"{other}\""
            ))),
        }
    }
}

/// Kinds of problems address verification can report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum AddressProblemType {
    /// A value was supplied for a field the region does not use
    #[display("USING_UNUSED_FIELD")]
    UsingUnusedField,
    /// A required field has no value
    #[display("MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    /// The value does not match the field's format pattern
    #[display("UNRECOGNIZED_FORMAT")]
    UnrecognizedFormat,
    /// The value is inconsistent with a value higher in the hierarchy
    #[display("MISMATCHING_VALUE")]
    MismatchingValue,
    /// The value is not one of the known candidates for the field
    #[display("UNKNOWN_VALUE")]
    UnknownValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        let mut seen = std::collections::HashSet::new();
        for field in AddressField::ALL {
            assert!(seen.insert(field.code()), "duplicate code for {field}");
            assert_eq!(AddressField::from_code(field.code()), Some(field));
        }
        assert_eq!(AddressField::from_code('n'), None);
    }

    #[test]
    fn test_parse_from_name_or_code() {
        assert_eq!("S".parse::<AddressField>().unwrap(), AddressField::AdminArea);
        assert_eq!(
            "postal_code".parse::<AddressField>().unwrap(),
            AddressField::PostalCode
        );
        assert!("bogus".parse::<AddressField>().is_err());
    }

    #[test]
    fn test_hierarchy_depth() {
        assert_eq!(AddressField::Country.hierarchy_depth(), Some(0));
        assert_eq!(AddressField::DependentLocality.hierarchy_depth(), Some(3));
        assert_eq!(AddressField::PostalCode.hierarchy_depth(), None);
    }

    #[test]
    fn test_parse_codes_skips_unknown() {
        assert_eq!(
            AddressField::parse_codes("AC?Z"),
            vec![
                AddressField::StreetAddress,
                AddressField::Locality,
                AddressField::PostalCode
            ]
        );
    }

    #[test]
    fn test_script_type_parse() {
        assert_eq!("latin".parse::<ScriptType>().unwrap(), ScriptType::Latin);
        assert_eq!(ScriptType::Local.to_string(), "local");
        assert!("roman".parse::<ScriptType>().is_err());
    }

    #[test]
    fn test_field_serde_uses_code() {
        let json = serde_json::to_string(&vec![AddressField::Recipient, AddressField::PostalCode])
            .unwrap();
        assert_eq!(json, r#"["N","Z"]"#);
        let back: Vec<AddressField> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![AddressField::Recipient, AddressField::PostalCode]);
    }
}
