//! Address client facade

use std::sync::Arc;
use std::time::Duration;

use postaddr_cache::{
    AsyncRequest, ClientCache, ClientData, DataLoadListener, DataSource, MetadataCache,
};
use postaddr_common::{
    AddressData, AddressField, Config, Error, FormOptions, Result, ScriptType,
};
use postaddr_metadata::{AddressDataKey, MetadataStore};
use postaddr_verify::{
    country_sublevel, AddressProblems, FieldVerifier, FormatInterpreter, StandardAddressVerifier,
    VerificationListener,
};
use serde::Serialize;
use tracing::debug;

/// A selectable value for a hierarchical field
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegionData {
    /// Value to store in the address
    pub key: String,
    /// Display name
    pub name: String,
}

/// Entry point for form layout, pickers, verification and formatting
pub struct AddressClient {
    data: ClientData,
    root: FieldVerifier,
    verifier: StandardAddressVerifier,
    formatter: FormatInterpreter,
}

impl AddressClient {
    pub fn new(cache: Arc<MetadataCache>, store: Arc<MetadataStore>, options: FormOptions) -> Result<Self> {
        let data = ClientData::new(cache);
        let root = FieldVerifier::root(Arc::new(data.clone()))?;
        Ok(Self {
            verifier: StandardAddressVerifier::new(root.clone()),
            formatter: FormatInterpreter::new(store, options),
            data,
            root,
        })
    }

    /// Client for the configured service, reached through `transport`
    pub fn from_config(
        config: &Config,
        transport: Arc<dyn AsyncRequest>,
        client_cache: Arc<dyn ClientCache>,
    ) -> Result<Self> {
        let store = Arc::new(MetadataStore::bootstrap());
        let cache = MetadataCache::new(config.service.url.clone(), transport)
            .with_timeout(Duration::from_millis(config.service.timeout_ms))
            .with_client_cache(client_cache)
            .with_bootstrap(store.clone());
        Self::new(Arc::new(cache), store, config.form.clone())
    }

    pub fn cache(&self) -> &MetadataCache {
        self.data.cache()
    }

    /// Fields of a region in display order
    pub fn field_order(&self, script: ScriptType, region_code: &str) -> Result<Vec<AddressField>> {
        self.formatter.field_order(script, region_code)
    }

    /// Known values for `field` below the ancestors already set in `address`.
    ///
    /// Empty when an ancestor is missing or the hierarchy has no data there.
    pub async fn candidate_values(
        &self,
        field: AddressField,
        address: &AddressData,
        script: ScriptType,
    ) -> Result<Vec<RegionData>> {
        let Some(depth) = field.hierarchy_depth() else {
            return Err(Error::UnknownField(format!("{field} is not a hierarchical field")));
        };
        if depth == 0 {
            return Ok(self.countries());
        }
        let Some(country) = address.postal_country() else {
            return Ok(Vec::new());
        };
        let country = self.root.key_for(country).unwrap_or(country);

        let language = match script {
            ScriptType::Latin => None,
            ScriptType::Local => address.language_code(),
        };
        let country_node = match language {
            Some(_) => self.data.get(&format!("data/{country}")).await,
            None => None,
        };
        let mut verifier = self
            .root
            .refine(&country_sublevel(country, language, country_node.as_ref()))
            .await;
        for ancestor in &AddressField::HIERARCHY[1..depth] {
            let Some(value) = address.field_value(*ancestor) else {
                return Ok(Vec::new());
            };
            verifier = verifier.refine(value).await;
        }
        debug!(field = %field, node = ?verifier.id(), "candidate values");

        let names = match script {
            ScriptType::Latin if !verifier.latin_names().is_empty() => verifier.latin_names(),
            _ => verifier.local_names(),
        };
        Ok(verifier
            .keys()
            .iter()
            .enumerate()
            .map(|(i, key)| RegionData {
                key: key.clone(),
                name: names.get(i).unwrap_or(key).clone(),
            })
            .collect())
    }

    fn countries(&self) -> Vec<RegionData> {
        let store = self.data.cache().bootstrap();
        store
            .country_codes()
            .map(|code| RegionData {
                key: code.to_string(),
                name: store
                    .attribute(code, AddressDataKey::Name)
                    .unwrap_or(code)
                    .to_string(),
            })
            .collect()
    }

    pub async fn verify(&self, address: &AddressData) -> AddressProblems {
        self.verifier.verify(address).await
    }

    pub async fn verify_with_listener(
        &self,
        address: &AddressData,
        listener: &dyn VerificationListener,
    ) -> AddressProblems {
        self.verifier.verify_with_listener(address, Some(listener)).await
    }

    /// Envelope lines for an address
    pub fn envelope(&self, address: &AddressData) -> Result<Vec<String>> {
        self.formatter.envelope(address)
    }

    /// Load a country's whole hierarchy ahead of use
    pub async fn prefetch_country(
        &self,
        region_code: &str,
        listener: Option<&dyn DataLoadListener>,
    ) -> Result<()> {
        self.data.prefetch_country(region_code, listener).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use postaddr_cache::{InMemoryClientCache, NoopClientCache, OfflineRequest, TransportError};
    use postaddr_common::AddressProblemType;
    use std::collections::HashMap;

    /// Serves a fixed set of nodes by URL
    struct StaticRequest {
        nodes: HashMap<String, String>,
    }

    impl StaticRequest {
        fn new(nodes: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self {
                nodes: nodes
                    .iter()
                    .map(|(key, json)| (format!("http://test/{key}"), (*json).to_string()))
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl AsyncRequest for StaticRequest {
        async fn request_object(
            &self,
            url: &str,
            _timeout: Duration,
        ) -> std::result::Result<String, TransportError> {
            self.nodes.get(url).cloned().ok_or(TransportError::Status(404))
        }
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.service.url = "http://test".to_string();
        config
    }

    fn client() -> AddressClient {
        let transport = StaticRequest::new(&[
            (
                "data/US",
                r#"{"id":"data/US","sub_keys":"CA~NY","sub_names":"California~New York"}"#,
            ),
            ("data/US/CA", r#"{"id":"data/US/CA","zip":"9[0-5]|96[01]"}"#),
            (
                "data/CA--fr",
                r#"{"id":"data/CA--fr","sub_keys":"QC~ON","sub_names":"Québec~Ontario"}"#,
            ),
            (
                "data/CN",
                r#"{"id":"data/CN","sub_keys":"北京市~广东省","sub_lnames":"Beijing Shi~Guangdong Sheng"}"#,
            ),
        ]);
        AddressClient::from_config(&config(), transport, Arc::new(NoopClientCache)).unwrap()
    }

    #[tokio::test]
    async fn test_country_candidates() {
        let countries = client()
            .candidate_values(AddressField::Country, &AddressData::default(), ScriptType::Local)
            .await
            .unwrap();
        assert!(countries.contains(&RegionData {
            key: "US".to_string(),
            name: "UNITED STATES".to_string(),
        }));
        assert!(countries.iter().all(|c| c.key != "ZZ"));
    }

    #[tokio::test]
    async fn test_admin_area_candidates() {
        let client = client();
        let address = AddressData::builder().set_country("US").build();
        let states = client
            .candidate_values(AddressField::AdminArea, &address, ScriptType::Local)
            .await
            .unwrap();
        assert_eq!(
            states,
            vec![
                RegionData { key: "CA".to_string(), name: "California".to_string() },
                RegionData { key: "NY".to_string(), name: "New York".to_string() },
            ]
        );
    }

    #[tokio::test]
    async fn test_candidates_by_script() {
        let client = client();
        let address = AddressData::builder().set_country("CN").build();
        let latin = client
            .candidate_values(AddressField::AdminArea, &address, ScriptType::Latin)
            .await
            .unwrap();
        assert_eq!(latin[1].key, "广东省");
        assert_eq!(latin[1].name, "Guangdong Sheng");

        let local = client
            .candidate_values(AddressField::AdminArea, &address, ScriptType::Local)
            .await
            .unwrap();
        assert_eq!(local[1].name, "广东省");
    }

    #[tokio::test]
    async fn test_candidates_follow_language() {
        let client = client();
        let address = AddressData::builder()
            .set_country("CA")
            .set_language_code("fr")
            .build();
        let provinces = client
            .candidate_values(AddressField::AdminArea, &address, ScriptType::Local)
            .await
            .unwrap();
        assert_eq!(provinces[0].name, "Québec");
    }

    #[tokio::test]
    async fn test_candidates_need_ancestors() {
        let client = client();
        let no_country = client
            .candidate_values(AddressField::AdminArea, &AddressData::default(), ScriptType::Local)
            .await
            .unwrap();
        assert!(no_country.is_empty());

        let no_state = client
            .candidate_values(
                AddressField::Locality,
                &AddressData::builder().set_country("US").build(),
                ScriptType::Local,
            )
            .await
            .unwrap();
        assert!(no_state.is_empty());

        let result = client
            .candidate_values(AddressField::PostalCode, &AddressData::default(), ScriptType::Local)
            .await;
        assert!(matches!(result, Err(Error::UnknownField(_))));
    }

    #[tokio::test]
    async fn test_verify_and_envelope() {
        let client = client();
        let address = AddressData::builder()
            .set_country("US")
            .set_admin_area("CA")
            .set_locality("Mt View")
            .set_address_line_1("1098 Alta Ave")
            .set_postal_code("10001")
            .build();
        let problems = client.verify(&address).await;
        assert_eq!(
            problems.get(AddressField::PostalCode),
            Some(AddressProblemType::MismatchingValue)
        );
        assert_eq!(
            client.envelope(&address).unwrap(),
            vec!["1098 Alta Ave", "Mt View, CA 10001"]
        );
    }

    #[tokio::test]
    async fn test_offline_client_uses_bootstrap_data() {
        let client_cache = Arc::new(InMemoryClientCache::new());
        let client =
            AddressClient::from_config(&config(), Arc::new(OfflineRequest), client_cache.clone())
                .unwrap();
        let address = AddressData::builder()
            .set_country("CH")
            .set_locality("Herrliberg")
            .set_address_line_1("Seestrasse 1")
            .set_postal_code("80470")
            .build();
        let problems = client.verify(&address).await;
        assert_eq!(
            problems.get(AddressField::PostalCode),
            Some(AddressProblemType::UnrecognizedFormat)
        );
        assert!(client.cache().contains("data/CH"));
        assert!(client_cache.is_empty());
    }

    #[tokio::test]
    async fn test_offline_language_variant_keeps_country_rules() {
        let client =
            AddressClient::from_config(&config(), Arc::new(OfflineRequest), Arc::new(NoopClientCache))
                .unwrap();
        let address = |language: &str, postal_code: &str| {
            AddressData::builder()
                .set_country("CA")
                .set_admin_area("QC")
                .set_locality("Montréal")
                .set_address_line_1("1 Rue Sainte-Catherine")
                .set_postal_code(postal_code)
                .set_language_code(language)
                .build()
        };

        for language in ["en", "fr"] {
            let problems = client.verify(&address(language, "NOT-A-CODE")).await;
            assert_eq!(problems.len(), 1, "{language}: {problems}");
            assert_eq!(
                problems.get(AddressField::PostalCode),
                Some(AddressProblemType::UnrecognizedFormat)
            );
            assert!(client.verify(&address(language, "H3Z 2Y7")).await.is_empty());
        }
        assert!(client.cache().contains("data/CA--fr"));
    }

    #[tokio::test]
    async fn test_offline_client_knows_every_country() {
        let client =
            AddressClient::from_config(&config(), Arc::new(OfflineRequest), Arc::new(NoopClientCache))
                .unwrap();
        for country in ["TH", "VN", "AF", "KE", "PE"] {
            let address = AddressData::builder()
                .set_country(country)
                .set_locality("Capital")
                .set_address_line_1("1 Main Road")
                .build();
            let problems = client.verify(&address).await;
            assert_eq!(problems.get(AddressField::Country), None, "{country}: {problems}");
        }
    }

    #[test]
    fn test_region_data_serializes_as_key_and_name() {
        let region = RegionData {
            key: "CA".to_string(),
            name: "California".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&region).unwrap(),
            serde_json::json!({"key": "CA", "name": "California"})
        );
    }

    #[tokio::test]
    async fn test_prefetch_writes_client_cache() {
        let client_cache = Arc::new(InMemoryClientCache::new());
        let transport = StaticRequest::new(&[(
            "data/US",
            r#"{"id":"data/US","sub_keys":"CA","sub_mores":"true"}"#,
        ), ("data/US/CA", r#"{"id":"data/US/CA"}"#)]);
        let client = AddressClient::from_config(&config(), transport, client_cache.clone()).unwrap();

        client.prefetch_country("US", None).await.unwrap();
        assert!(client.cache().contains("data/US/CA"));
        assert_eq!(client_cache.len(), 2);
    }

    #[test]
    fn test_field_order_uses_form_options() {
        let mut config = config();
        config.form = FormOptions::new().with_custom_field_order(
            "US",
            vec![AddressField::PostalCode, AddressField::Locality],
        );
        let client =
            AddressClient::from_config(&config, Arc::new(OfflineRequest), Arc::new(NoopClientCache))
                .unwrap();
        let order = client.field_order(ScriptType::Local, "US").unwrap();
        assert_eq!(
            &order[4..],
            &[AddressField::PostalCode, AddressField::AdminArea, AddressField::Locality]
        );
    }
}
