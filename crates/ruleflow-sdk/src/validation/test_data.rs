//! Fixture-backed data source

use async_trait::async_trait;
use ruleflow_core::DataSet;
use ruleflow_runtime::{DataFetchingContext, DataSourceAdaptor, Result};

/// Answers every request from a fixed data set, whatever the source name.
///
/// Only parameters whose keys were requested are returned.
#[derive(Debug, Clone, Default)]
pub struct TestDataAdaptor {
    data: DataSet,
}

impl TestDataAdaptor {
    pub fn new(data: DataSet) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }
}

#[async_trait]
impl DataSourceAdaptor for TestDataAdaptor {
    async fn fetch(&self, context: DataFetchingContext) -> Result<DataSet> {
        Ok(context
            .parameter_keys
            .iter()
            .flat_map(|key| self.data.lookup(key).iter().cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruleflow_core::{Parameter, ParameterKey};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_returns_only_requested_keys() {
        let data: DataSet = vec![
            Parameter::parse("ds1:attr", "p-one").unwrap(),
            Parameter::parse("ds1:attr", "p-two").unwrap(),
            Parameter::parse("ds2:attr", "c-two").unwrap(),
        ]
        .into_iter()
        .collect();
        let adaptor = TestDataAdaptor::new(data);

        let wanted = ParameterKey::new("ds1", "attr");
        let context = DataFetchingContext::new(vec![wanted.clone()], Arc::default());
        let fetched = adaptor.fetch(context).await.unwrap();

        assert_eq!(fetched.len(), 2);
        assert!(fetched.lookup(&ParameterKey::new("ds2", "attr")).is_empty());
        assert_eq!(fetched.lookup(&wanted).len(), 2);
    }
}
