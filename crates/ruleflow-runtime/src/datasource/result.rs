//! Aggregated fetch result

use crate::error::DataSourceError;
use ruleflow_core::DataSet;
use std::collections::HashMap;

/// Union of every successful source's data plus one error per failed source
#[derive(Debug, Clone, Default)]
pub struct DataFetchResult {
    pub data_set: DataSet,
    pub errors: HashMap<String, DataSourceError>,
}

impl DataFetchResult {
    /// An empty, error-free result
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> DataFetchResultBuilder {
        DataFetchResultBuilder::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether `source` reported a failure
    pub fn failed(&self, source: &str) -> bool {
        self.errors.contains_key(source)
    }
}

/// Incremental builder; a failed source never discards data already added
#[derive(Debug, Default)]
pub struct DataFetchResultBuilder {
    data_set: DataSet,
    errors: HashMap<String, DataSourceError>,
}

impl DataFetchResultBuilder {
    /// Merge a successful source's data
    pub fn add_data_set(&mut self, data_set: DataSet) -> &mut Self {
        self.data_set.merge(data_set);
        self
    }

    /// Record a source failure; a later error for the same source replaces the earlier one
    pub fn add_error(&mut self, source: impl Into<String>, error: DataSourceError) -> &mut Self {
        self.errors.insert(source.into(), error);
        self
    }

    pub fn build(self) -> DataFetchResult {
        DataFetchResult {
            data_set: self.data_set,
            errors: self.errors,
        }
    }
}
