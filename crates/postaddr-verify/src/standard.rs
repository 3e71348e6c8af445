//! Address verification walk
//!
//! Fields are checked in hierarchy order (country, admin area, locality,
//! dependent locality), descending the verifier tree after each field that
//! passes. The remaining fields are then checked against the deepest
//! verifier reached.

use std::collections::HashMap;

use postaddr_common::key::DASH_DELIM;
use postaddr_common::language::{is_explicit_latin_script, language_subtag};
use postaddr_common::{AddressData, AddressField, AddressProblemType, ScriptType};
use postaddr_metadata::{AddressDataKey, NodeData};
use tracing::debug;

use crate::problems::AddressProblems;
use crate::verifier::FieldVerifier;

/// Observer of a verification run
pub trait VerificationListener: Send + Sync {
    fn verification_started(&self, _address: &AddressData) {}
    fn verification_ended(&self, _address: &AddressData, _problems: &AddressProblems) {}
}

/// Checks run per field, in order; the first failing check wins
pub type ProblemMap = HashMap<AddressField, Vec<AddressProblemType>>;

/// Default checks for every verified field
#[must_use]
pub fn default_problem_map() -> ProblemMap {
    use AddressProblemType::{
        MismatchingValue, MissingRequiredField, UnknownValue, UnrecognizedFormat, UsingUnusedField,
    };

    let hierarchical = vec![UsingUnusedField, MissingRequiredField, UnknownValue];
    let plain = vec![UsingUnusedField, MissingRequiredField];

    let mut map = ProblemMap::new();
    for field in AddressField::HIERARCHY {
        map.insert(field, hierarchical.clone());
    }
    map.insert(
        AddressField::PostalCode,
        vec![UsingUnusedField, MissingRequiredField, UnrecognizedFormat, MismatchingValue],
    );
    for field in [
        AddressField::StreetAddress,
        AddressField::SortingCode,
        AddressField::Organization,
        AddressField::Recipient,
    ] {
        map.insert(field, plain.clone());
    }
    map
}

/// Segment to refine into for a country.
///
/// An address written in one of the country's non-default languages uses
/// the language-specific node, e.g. `CA--fr`; everything else, including
/// explicit Latin script, uses the plain country node.
#[must_use]
pub fn country_sublevel(country: &str, language_code: Option<&str>, country_node: Option<&NodeData>) -> String {
    let (Some(lang), Some(node)) = (language_code, country_node) else {
        return country.to_string();
    };
    if is_explicit_latin_script(lang) {
        return country.to_string();
    }

    let wanted = language_subtag(lang);
    let languages = node.languages();
    let default = node
        .get(AddressDataKey::Lang)
        .or_else(|| languages.first().copied())
        .map(language_subtag);
    if default.as_deref() == Some(wanted.as_str()) {
        return country.to_string();
    }
    match languages.iter().find(|l| language_subtag(l) == wanted) {
        Some(language) => format!("{country}{DASH_DELIM}{language}"),
        None => country.to_string(),
    }
}

/// Verifies whole addresses against the metadata hierarchy
#[derive(Clone, Debug)]
pub struct StandardAddressVerifier {
    root: FieldVerifier,
    problem_map: ProblemMap,
}

impl StandardAddressVerifier {
    /// Verifier running the default checks
    pub fn new(root: FieldVerifier) -> Self {
        Self::with_problem_map(root, default_problem_map())
    }

    /// Verifier running caller-chosen checks; fields absent from the map are not checked
    pub fn with_problem_map(root: FieldVerifier, problem_map: ProblemMap) -> Self {
        Self { root, problem_map }
    }

    pub fn problem_map(&self) -> &ProblemMap {
        &self.problem_map
    }

    pub async fn verify(&self, address: &AddressData) -> AddressProblems {
        self.verify_with_listener(address, None).await
    }

    pub async fn verify_with_listener(
        &self,
        address: &AddressData,
        listener: Option<&dyn VerificationListener>,
    ) -> AddressProblems {
        if let Some(l) = listener {
            l.verification_started(address);
        }

        let script = address.language_code().map(|lang| {
            if is_explicit_latin_script(lang) {
                ScriptType::Latin
            } else {
                ScriptType::Local
            }
        });
        let mut problems = AddressProblems::new();
        let mut verifier = self.root.clone();

        if self.verify_field(script, &verifier, AddressField::Country, address.postal_country(), &mut problems) {
            let country = address.postal_country().unwrap_or_default();
            let country = self.root.key_for(country).unwrap_or(country);
            let sublevel = self.resolve_country(country, address.language_code()).await;
            verifier = verifier.refine(&sublevel).await;

            for field in &AddressField::HIERARCHY[1..] {
                let value = address.field_value(*field);
                if !self.verify_field(script, &verifier, *field, value, &mut problems) {
                    break;
                }
                verifier = verifier.refine(value.unwrap_or_default()).await;
            }
        }

        let street = address.street_address();
        let remaining = [
            (AddressField::PostalCode, address.postal_code()),
            (AddressField::StreetAddress, street.as_deref()),
            (AddressField::SortingCode, address.sorting_code()),
            (AddressField::Organization, address.organization()),
            (AddressField::Recipient, address.recipient()),
        ];
        for (field, value) in remaining {
            self.verify_field(script, &verifier, field, value, &mut problems);
        }

        debug!(problems = problems.len(), node = ?verifier.id(), "verification complete");
        if let Some(l) = listener {
            l.verification_ended(address, &problems);
        }
        problems
    }

    async fn resolve_country(&self, country: &str, language_code: Option<&str>) -> String {
        if language_code.is_none() || country.is_empty() {
            return country.to_string();
        }
        let node = self
            .root
            .data_source()
            .get(&format!("data/{country}"))
            .await;
        country_sublevel(country, language_code, node.as_ref())
    }

    fn verify_field(
        &self,
        script: Option<ScriptType>,
        verifier: &FieldVerifier,
        field: AddressField,
        value: Option<&str>,
        problems: &mut AddressProblems,
    ) -> bool {
        let Some(checks) = self.problem_map.get(&field) else {
            return true;
        };
        checks
            .iter()
            .all(|problem| verifier.check(script, *problem, field, value, problems))
    }
}
