//! Remote configuration properties

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for fetching rules and configuration over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfigProperties {
    /// Value sent verbatim as the `Authorization` header (e.g. `Basic dXNlcjpwYXNz`)
    pub basic_auth: Option<String>,

    /// Serve fresh responses from the cache instead of refetching
    pub use_cache: bool,

    /// Seconds a cached response stays fresh
    pub cache_expiry_secs: u64,

    /// Seconds an expired response may still be used as a fallback
    pub max_stale_secs: u64,

    /// Bound on cached responses
    pub cache_max_entries: usize,

    pub connect_timeout_secs: u64,

    pub request_timeout_secs: u64,
}

impl Default for RemoteConfigProperties {
    fn default() -> Self {
        Self {
            basic_auth: None,
            use_cache: false,
            cache_expiry_secs: 300,
            max_stale_secs: 300,
            cache_max_entries: 10,
            connect_timeout_secs: 15,
            request_timeout_secs: 15,
        }
    }
}

impl RemoteConfigProperties {
    /// Create properties with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `Authorization` header value
    pub fn with_basic_auth(mut self, basic_auth: impl Into<String>) -> Self {
        self.basic_auth = Some(basic_auth.into());
        self
    }

    /// Enable or disable response caching
    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Set cache expiry and max-stale windows
    pub fn with_cache_timings(mut self, expiry_secs: u64, max_stale_secs: u64) -> Self {
        self.cache_expiry_secs = expiry_secs;
        self.max_stale_secs = max_stale_secs;
        self
    }

    /// Set the cache bound
    pub fn with_cache_max_entries(mut self, max_entries: usize) -> Self {
        self.cache_max_entries = max_entries;
        self
    }

    /// Set connect and overall request timeouts
    pub fn with_timeouts(mut self, connect_secs: u64, request_secs: u64) -> Self {
        self.connect_timeout_secs = connect_secs;
        self.request_timeout_secs = request_secs;
        self
    }

    pub fn cache_expiry(&self) -> Duration {
        Duration::from_secs(self.cache_expiry_secs)
    }

    pub fn max_stale(&self) -> Duration {
        Duration::from_secs(self.max_stale_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
