//! Concurrent fan-out of data requests to named data sources

use super::adaptor::DataFetchingContext;
use super::registry::AdaptorRegistry;
use super::result::DataFetchResult;
use crate::error::DataSourceError;
use futures::future::join_all;
use ruleflow_core::{DataSet, ParameterKey, UserContext};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Dispatches one fetch task per data source and aggregates the outcomes.
///
/// Failures are isolated per source: an unknown source name, an adaptor error
/// or a panicking fetch task is recorded in the result and never cancels
/// sibling fetches.
#[derive(Debug, Clone, Default)]
pub struct DataFetchService {
    registry: Arc<AdaptorRegistry>,
}

impl DataFetchService {
    pub fn new(registry: AdaptorRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &AdaptorRegistry {
        &self.registry
    }

    /// Fetch the requested keys from every listed data source.
    ///
    /// Waits for all dispatched fetches to settle before returning.
    pub async fn fetch_data(
        &self,
        parameters_by_data_source: &HashMap<String, Vec<ParameterKey>>,
        user_context: Arc<UserContext>,
    ) -> DataFetchResult {
        if parameters_by_data_source.is_empty() {
            return DataFetchResult::empty();
        }

        let mut builder = DataFetchResult::builder();
        let mut handles = Vec::with_capacity(parameters_by_data_source.len());

        for (source, keys) in parameters_by_data_source {
            let Some(adaptor) = self.registry.get(source) else {
                error!("Exception fetching data from data source {}: not registered", source);
                builder.add_error(source.clone(), DataSourceError::NotRegistered(source.clone()));
                continue;
            };

            debug!("Fetching {} parameter(s) from data source {}", keys.len(), source);
            let context = DataFetchingContext::new(keys.clone(), Arc::clone(&user_context));
            let handle = tokio::spawn(async move { adaptor.fetch(context).await });
            handles.push((source.clone(), handle));
        }

        let outcomes = join_all(
            handles
                .into_iter()
                .map(|(source, handle)| async move { (source, handle.await) }),
        )
        .await;

        for (source, outcome) in outcomes {
            match outcome {
                Ok(Ok(data_set)) => {
                    builder.add_data_set(data_set);
                }
                Ok(Err(err)) => {
                    error!("Exception fetching data from data source {}: {}", source, err);
                    builder.add_error(source, err);
                }
                Err(join_error) => {
                    error!(
                        "Fetch task for data source {} did not complete: {}",
                        source, join_error
                    );
                    let err = DataSourceError::TaskFailed {
                        source_name: source.clone(),
                        message: join_error.to_string(),
                    };
                    builder.add_error(source, err);
                }
            }
        }

        builder.build()
    }

    /// Fetch from a single source, outside of the fan-out
    pub async fn fetch_from(
        &self,
        source: &str,
        keys: Vec<ParameterKey>,
        user_context: Arc<UserContext>,
    ) -> crate::error::Result<DataSet> {
        let adaptor = self
            .registry
            .get(source)
            .ok_or_else(|| DataSourceError::NotRegistered(source.to_string()))?;
        adaptor
            .fetch(DataFetchingContext::new(keys, user_context))
            .await
    }
}
