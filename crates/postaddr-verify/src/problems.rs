//! Verification results

use std::collections::BTreeMap;
use std::fmt;

use postaddr_common::{AddressField, AddressProblemType};

/// Problems found in an address, at most one per field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressProblems {
    problems: BTreeMap<AddressField, AddressProblemType>,
}

impl AddressProblems {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem, replacing any earlier one for the same field
    pub fn add(&mut self, field: AddressField, problem: AddressProblemType) {
        self.problems.insert(field, problem);
    }

    #[must_use]
    pub fn get(&self, field: AddressField) -> Option<AddressProblemType> {
        self.problems.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn clear(&mut self) {
        self.problems.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (AddressField, AddressProblemType)> + '_ {
        self.problems.iter().map(|(f, p)| (*f, *p))
    }
}

impl fmt::Display for AddressProblems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, problem)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {problem}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_problem_per_field() {
        let mut problems = AddressProblems::new();
        assert!(problems.is_empty());
        problems.add(AddressField::PostalCode, AddressProblemType::UnrecognizedFormat);
        problems.add(AddressField::PostalCode, AddressProblemType::MismatchingValue);
        problems.add(AddressField::Locality, AddressProblemType::MissingRequiredField);

        assert_eq!(problems.len(), 2);
        assert_eq!(
            problems.get(AddressField::PostalCode),
            Some(AddressProblemType::MismatchingValue)
        );
        assert_eq!(problems.get(AddressField::Country), None);
    }

    #[test]
    fn test_display() {
        let mut problems = AddressProblems::new();
        assert_eq!(problems.to_string(), "{}");
        problems.add(AddressField::PostalCode, AddressProblemType::MismatchingValue);
        assert_eq!(problems.to_string(), "{POSTAL_CODE: MISMATCHING_VALUE}");
    }
}
