//! Data source adaptor contract

use crate::error::Result;
use async_trait::async_trait;
use ruleflow_core::{DataSet, ParameterKey, UserContext};
use std::sync::Arc;

/// Request handed to an adaptor: the keys wanted from it plus the caller's context
#[derive(Debug, Clone)]
pub struct DataFetchingContext {
    pub parameter_keys: Vec<ParameterKey>,
    pub user_context: Arc<UserContext>,
}

impl DataFetchingContext {
    pub fn new(parameter_keys: Vec<ParameterKey>, user_context: Arc<UserContext>) -> Self {
        Self {
            parameter_keys,
            user_context,
        }
    }
}

/// A named provider of parameters.
///
/// Implementations own their timeouts; the orchestrator waits for every
/// dispatched fetch to settle.
#[async_trait]
pub trait DataSourceAdaptor: Send + Sync {
    /// Fetch the parameters named in `context`
    async fn fetch(&self, context: DataFetchingContext) -> Result<DataSet>;
}
