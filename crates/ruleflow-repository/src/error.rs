//! Error types for the repository layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur while loading rules or remote configuration
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No rule document at the resolved location
    #[error("Rules not found: {location}")]
    NotFound { location: String },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error with no cached fallback
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status and no cached fallback exists
    #[error("Server returned status {status} when fetching remote config from {url}")]
    Status { url: String, status: u16 },

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Location scheme the loader cannot resolve
    #[error("Unsupported rules location: {0}")]
    UnsupportedLocation(String),

    /// A collaborator needed for this location is not configured
    #[error("Not configured: {0}")]
    NotConfigured(String),
}
