//! Data source error types

use thiserror::Error;

/// Error raised while fetching data from one data source.
///
/// Cloneable so it can be stored per source in a
/// [`DataFetchResult`](crate::datasource::DataFetchResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    /// No adaptor is registered under the source name
    #[error("No data source adaptor registered for '{0}'")]
    NotRegistered(String),

    /// The adaptor reported a failure
    #[error("Data source '{source_name}' failed: {message}")]
    FetchFailed {
        source_name: String,
        message: String,
    },

    /// The fetch task panicked or was cancelled
    #[error("Fetch task for data source '{source_name}' did not complete: {message}")]
    TaskFailed {
        source_name: String,
        message: String,
    },

    /// A payload could not be mapped into a data set
    #[error("Data mapping error: {0}")]
    Mapping(String),
}

impl DataSourceError {
    /// Convenience constructor for adaptor failures
    pub fn fetch_failed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        DataSourceError::FetchFailed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DataSourceError {
    fn from(err: serde_json::Error) -> Self {
        DataSourceError::Mapping(err.to_string())
    }
}

/// Result type for data source operations
pub type Result<T> = std::result::Result<T, DataSourceError>;
