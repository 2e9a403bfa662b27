//! Error types for ruleflow Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Composite key is not of the form `source:name`
    #[error("Malformed parameter key: '{0}' (expected 'source:name')")]
    MalformedKey(String),

    /// Value is neither an ISO date nor an ISO date-time
    #[error("Unknown date-time format: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
