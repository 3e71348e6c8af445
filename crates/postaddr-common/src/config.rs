//! Configuration types for postaddr
//!
//! This module defines configuration structures used across components.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::AddressField;

/// Root configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Metadata service configuration
    #[serde(default)]
    pub service: ServiceConfig,
    /// Form layout options
    #[serde(default)]
    pub form: FormOptions,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Metadata service endpoint configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL; lookup keys are appended after a `/`
    #[serde(default = "default_service_url")]
    pub url: String,
    /// Per-request timeout (milliseconds)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_service_url() -> String {
    "https://chromium-i18n.appspot.com/ssl-aggregate-address".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Caller-supplied form layout overrides
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOptions {
    /// Region code -> preferred relative order of fields
    #[serde(default)]
    pub custom_field_order: BTreeMap<String, Vec<AddressField>>,
}

impl FormOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom field order for a region
    #[must_use]
    pub fn with_custom_field_order(
        mut self,
        region_code: impl Into<String>,
        fields: Vec<AddressField>,
    ) -> Self {
        self.custom_field_order.insert(region_code.into(), fields);
        self
    }

    /// Custom field order for a region, if any
    #[must_use]
    pub fn custom_field_order(&self, region_code: &str) -> Option<&[AddressField]> {
        self.custom_field_order
            .get(region_code)
            .map(Vec::as_slice)
            .filter(|fields| !fields.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.timeout_ms, 5000);
        assert_eq!(config.logging.level, "info");
        assert!(config.form.custom_field_order.is_empty());
    }

    #[test]
    fn test_parse_toml_with_field_codes() {
        let config: Config = toml::from_str(
            r#"
            [service]
            url = "http://localhost:8080/address"

            [form.custom_field_order]
            US = ["Z", "C", "S"]
            "#,
        )
        .unwrap();
        assert_eq!(config.service.url, "http://localhost:8080/address");
        assert_eq!(config.service.timeout_ms, 5000);
        assert_eq!(
            config.form.custom_field_order("US"),
            Some(
                &[
                    AddressField::PostalCode,
                    AddressField::Locality,
                    AddressField::AdminArea
                ][..]
            )
        );
        assert_eq!(config.form.custom_field_order("CH"), None);
    }
}
