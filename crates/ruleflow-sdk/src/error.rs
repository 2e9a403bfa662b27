//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Rule model error (malformed keys, dates)
    #[error("Rule model error: {0}")]
    Core(#[from] ruleflow_core::CoreError),

    /// Rule loading or remote configuration error
    #[error("Repository error: {0}")]
    Repository(#[from] ruleflow_repository::RepositoryError),

    /// Configuration file or environment could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A rule set was requested by name but no loader is configured
    #[error("No rules loader configured to load '{0}'")]
    LoaderNotConfigured(String),

    /// Rule validation tests did not match
    #[error("Business rule tests failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
