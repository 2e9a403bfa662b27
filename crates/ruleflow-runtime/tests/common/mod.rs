//! Common test adaptors for runtime integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use ruleflow_core::{DataSet, Parameter, ParameterKey};
use ruleflow_runtime::{DataFetchingContext, DataSourceAdaptor, DataSourceError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

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

/// Panics inside the fetch task
pub struct PanickingAdaptor;

#[async_trait]
impl DataSourceAdaptor for PanickingAdaptor {
    async fn fetch(&self, _context: DataFetchingContext) -> Result<DataSet> {
        panic!("adaptor bug")
    }
}

/// Sleeps before answering, to prove siblings are not serialized
pub struct SlowAdaptor {
    pub delay: Duration,
    pub key: ParameterKey,
}

#[async_trait]
impl DataSourceAdaptor for SlowAdaptor {
    async fn fetch(&self, _context: DataFetchingContext) -> Result<DataSet> {
        tokio::time::sleep(self.delay).await;
        Ok([Parameter::with_value(self.key.clone(), "late")]
            .into_iter()
            .collect())
    }
}

/// Echoes a value from the user context under every requested key
pub struct ContextEchoAdaptor {
    pub context_key: &'static str,
}

#[async_trait]
impl DataSourceAdaptor for ContextEchoAdaptor {
    async fn fetch(&self, context: DataFetchingContext) -> Result<DataSet> {
        let value = context
            .user_context
            .get(self.context_key)
            .and_then(|value| value.as_str())
            .map(str::to_string);
        Ok(context
            .parameter_keys
            .into_iter()
            .map(|key| Parameter::new(key, value.clone()))
            .collect())
    }
}
