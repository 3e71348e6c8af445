//! Address input from flags or a JSON file

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use postaddr_common::{AddressData, AddressField};

/// Address fields accepted on the command line
#[derive(Args, Debug, Default)]
pub struct AddressArgs {
    /// JSON object of field name or code to value; flags override its entries
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Region code, e.g. US
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub admin_area: Option<String>,

    #[arg(long)]
    pub locality: Option<String>,

    #[arg(long)]
    pub dependent_locality: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,

    #[arg(long)]
    pub sorting_code: Option<String>,

    /// Street address line (repeatable)
    #[arg(long = "line")]
    pub lines: Vec<String>,

    #[arg(long)]
    pub organization: Option<String>,

    #[arg(long)]
    pub recipient: Option<String>,

    /// BCP 47 language tag of the address
    #[arg(long)]
    pub language: Option<String>,
}

const LANGUAGE_CODE: &str = "language_code";

impl AddressArgs {
    pub fn to_address(&self) -> Result<AddressData> {
        let mut builder = AddressData::builder();

        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let entries: BTreeMap<String, String> = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            for (name, value) in entries {
                if name == LANGUAGE_CODE {
                    builder = builder.set_language_code(value);
                    continue;
                }
                let field: AddressField = name.parse()?;
                builder = builder.set(field, value);
            }
        }

        let flags = [
            (AddressField::Country, &self.country),
            (AddressField::AdminArea, &self.admin_area),
            (AddressField::Locality, &self.locality),
            (AddressField::DependentLocality, &self.dependent_locality),
            (AddressField::PostalCode, &self.postal_code),
            (AddressField::SortingCode, &self.sorting_code),
            (AddressField::Organization, &self.organization),
            (AddressField::Recipient, &self.recipient),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                builder = builder.set(field, value);
            }
        }
        if !self.lines.is_empty() {
            builder = builder.set(AddressField::StreetAddress, self.lines.join("\n"));
        }
        if let Some(language) = &self.language {
            builder = builder.set_language_code(language);
        }
        Ok(builder.build())
    }
}
