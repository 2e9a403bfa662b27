//! Common fixtures for SDK integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use ruleflow_core::{DataSet, Parameter, Rules};
use ruleflow_runtime::{DataFetchingContext, DataSourceAdaptor, DataSourceError, Result};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// One feature gated on `ds1:attr`, matching on `ds2:attr`
pub const OFFERS_JSON: &str = r#"{
  "features": [
    {
      "name": "premium-offer",
      "requirements": {
        "preConditions": [{"key": "ds1:attr", "equals": "p-one"}],
        "conditions": [{"key": "ds2:attr", "equals": "c-two"}]
      }
    }
  ]
}"#;

/// Tests for [`OFFERS_JSON`]: one expected to pass, one expected to fail
pub const OFFERS_TESTS_JSON: &str = r#"{
  "features": [
    {
      "name": "offer-when-both-match",
      "requirements": {
        "conditions": [
          {"key": "rules-validator:rule-execution-result.feature-name", "equals": "premium-offer"},
          {"key": "rules-validator:rule-execution-result.returnValue", "equals": "true"}
        ]
      },
      "testData": [
        {"key": "ds1:attr", "dataValue": "p-one"},
        {"key": "ds2:attr", "dataValue": "c-two"}
      ]
    },
    {
      "name": "offer-when-pre-condition-fails",
      "requirements": {
        "conditions": [
          {"key": "rules-validator:rule-execution-result.feature-name", "equals": "premium-offer"}
        ]
      },
      "testData": [
        {"key": "ds1:attr", "dataValue": "p-fail"},
        {"key": "ds2:attr", "dataValue": "c-two"}
      ]
    }
  ]
}"#;

/// Two independent features, the first gated on the `broken` source
pub const TWO_FEATURES_JSON: &str = r#"{
  "features": [
    {
      "name": "needs-broken",
      "requirements": {
        "preConditions": [{"key": "broken:attr", "equals": "anything"}],
        "conditions": [{"key": "ds2:attr", "equals": "c-two"}]
      }
    },
    {
      "name": "independent",
      "requirements": {
        "conditions": [{"key": "ds2:attr", "equals": "c-two"}]
      },
      "actions": [{"type": "return", "value": "YES", "defaultValue": "NO"}]
    }
  ]
}"#;

pub fn rules(json: &str) -> Rules {
    serde_json::from_str(json).unwrap()
}

/// Write a fixture file, creating parent directories
pub fn write_fixture(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Answers every requested key with a fixed value per key name
pub struct StaticAdaptor {
    values: Vec<(String, String)>,
    pub calls: AtomicUsize,
}

impl StaticAdaptor {
    pub fn new(values: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            values: values
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSourceAdaptor for StaticAdaptor {
    async fn fetch(&self, context: DataFetchingContext) -> Result<DataSet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(context
            .parameter_keys
            .into_iter()
            .flat_map(|key| {
                self.values
                    .iter()
                    .filter(|(name, _)| name == key.name())
                    .map(|(_, value)| Parameter::with_value(key.clone(), value.clone()))
                    .collect::<Vec<_>>()
            })
            .collect())
    }
}

/// Always fails with a fetch error
pub struct FailingAdaptor {
    pub name: &'static str,
}

#[async_trait]
impl DataSourceAdaptor for FailingAdaptor {
    async fn fetch(&self, _context: DataFetchingContext) -> Result<DataSet> {
        Err(DataSourceError::fetch_failed(self.name, "service unavailable"))
    }
}
