//! In-memory data source for tests

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use postaddr_cache::DataSource;
use postaddr_common::key::DASH_DELIM;
use postaddr_common::{Error, Result};
use postaddr_metadata::{merge, MetadataStore, NodeData};

/// Bootstrap data plus a handful of hierarchy nodes below it
pub struct FixtureData {
    store: MetadataStore,
    nodes: HashMap<String, NodeData>,
    pub lookups: AtomicUsize,
}

impl FixtureData {
    pub fn new() -> Self {
        let store = MetadataStore::bootstrap();
        let mut nodes = HashMap::new();
        let mut add = |key: &str, json: &str| {
            let node = NodeData::from_json(json).unwrap();
            // Language variants share their country's bootstrap record.
            let country = key.split(DASH_DELIM).next().unwrap_or(key);
            let node = match store.node_for_key(country) {
                Some(bootstrap) => merge(&node, bootstrap),
                None => node,
            };
            nodes.insert(key.to_string(), node);
        };

        add(
            "data/US",
            r#"{"id":"data/US","sub_keys":"CA~NY~TX","sub_names":"California~New York~Texas"}"#,
        );
        add(
            "data/US/CA",
            r#"{"id":"data/US/CA","key":"CA","name":"California","zip":"9[0-5]|96[01]"}"#,
        );
        add(
            "data/US/NY",
            r#"{"id":"data/US/NY","key":"NY","name":"New York","zip":"1[0-4]|06390|00501|00544"}"#,
        );
        add(
            "data/CN",
            r#"{"id":"data/CN","sub_keys":"北京市~广东省","sub_lnames":"Beijing Shi~Guangdong Sheng"}"#,
        );
        add(
            "data/CN/广东省",
            r#"{"id":"data/CN/广东省","sub_keys":"深圳市~广州市","sub_lnames":"Shenzhen Shi~Guangzhou Shi","zip":"5[1-2]"}"#,
        );
        add(
            "data/CA",
            r#"{"id":"data/CA","sub_keys":"QC~ON","sub_names":"Quebec~Ontario"}"#,
        );
        add(
            "data/CA--fr",
            r#"{"id":"data/CA--fr","sub_keys":"QC~ON","sub_names":"Québec~Ontario"}"#,
        );

        Self {
            store,
            nodes,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl DataSource for FixtureData {
    async fn get(&self, key: &str) -> Option<NodeData> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.nodes
            .get(key)
            .or_else(|| self.store.node_for_key(key))
            .cloned()
    }

    fn default_data(&self, key: &str) -> Result<NodeData> {
        self.store
            .node_for_key(key)
            .cloned()
            .ok_or_else(|| Error::MissingDefaultData(key.to_string()))
    }

    fn country_codes(&self) -> Vec<String> {
        self.store.country_codes().map(str::to_string).collect()
    }
}
